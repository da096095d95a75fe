//! Slot mutation with one-level cascading invalidation.

use std::sync::Arc;

use rig_model::{Part, SelectionState, Slot};
use rig_validate::hard_conflicts;
use tracing::debug;

/// A single mutation of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Put a part into a slot, clearing neighbours it conflicts with.
    Set(Slot, Arc<Part>),
    /// Empty a slot. Never cascades.
    Clear(Slot),
    /// Empty every slot.
    Reset,
}

/// Write `part` into `slot` and clear every directly related slot whose
/// current pick now fails a hard rule against it.
///
/// The cascade is one level deep: a cleared neighbour's own neighbours are
/// not rechecked. Returns the cleared slots in rule order.
///
/// # Panics
///
/// Panics if `part` belongs to a category `slot` does not hold.
pub fn apply(state: &mut SelectionState, slot: Slot, part: Option<Arc<Part>>) -> Vec<Slot> {
    let Some(part) = part else {
        state.place(slot, None);
        return Vec::new();
    };

    state.place(slot, Some(Arc::clone(&part)));
    if !slot.is_constrained() {
        return Vec::new();
    }

    let conflicts = hard_conflicts(&part, state);
    let mut cleared = Vec::with_capacity(conflicts.len());
    for (neighbour, violation) in conflicts {
        if let Some(removed) = state.place(neighbour, None) {
            debug!(
                slot = %slot,
                part = %part.id,
                cleared = %neighbour,
                removed = %removed.id,
                rule = violation.rule.as_str(),
                reason = %violation.message,
                "cascade cleared slot"
            );
            cleared.push(neighbour);
        }
    }
    cleared
}

/// Pure form of [`apply`]: returns the next state and leaves `state` alone.
pub fn set_slot(state: &SelectionState, slot: Slot, part: Option<Arc<Part>>) -> SelectionState {
    let mut next = state.clone();
    apply(&mut next, slot, part);
    next
}

/// Reducer over [`SelectionAction`].
pub fn reduce(state: &SelectionState, action: SelectionAction) -> SelectionState {
    match action {
        SelectionAction::Set(slot, part) => set_slot(state, slot, Some(part)),
        SelectionAction::Clear(slot) => set_slot(state, slot, None),
        SelectionAction::Reset => SelectionState::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_model::{
        CpuSpec, FormFactor, MemoryType, MotherboardSpec, OsFamily, OsSpec, PartSpec, RamSpec,
        Socket,
    };

    fn part(id: &str, spec: PartSpec) -> Arc<Part> {
        Arc::new(Part {
            id: id.to_string(),
            name: id.to_string(),
            brand: "Test".to_string(),
            price: 100,
            in_stock: true,
            spec,
        })
    }

    fn cpu(id: &str, socket: &str) -> Arc<Part> {
        part(
            id,
            PartSpec::Cpu(CpuSpec {
                socket: Socket::new(socket),
                wattage: 65,
                supports_integrated_graphics: false,
            }),
        )
    }

    fn board(id: &str, socket: &str, memory: MemoryType) -> Arc<Part> {
        part(
            id,
            PartSpec::Motherboard(MotherboardSpec {
                socket: Socket::new(socket),
                memory_type: memory,
                form_factor: FormFactor::Atx,
            }),
        )
    }

    fn ram(id: &str, memory: MemoryType) -> Arc<Part> {
        part(
            id,
            PartSpec::Ram(RamSpec {
                memory_type: memory,
                capacity: None,
            }),
        )
    }

    #[test]
    fn cascade_is_one_level() {
        let mut state = SelectionState::new();
        apply(&mut state, Slot::Cpu, Some(cpu("c1", "AM4")));
        apply(&mut state, Slot::Motherboard, Some(board("b", "AM4", MemoryType::Ddr4)));
        apply(&mut state, Slot::Ram, Some(ram("r", MemoryType::Ddr4)));

        let cleared = apply(&mut state, Slot::Cpu, Some(cpu("c2", "AM5")));
        assert_eq!(cleared, vec![Slot::Motherboard]);
        assert!(state.get(Slot::Motherboard).is_none());
        // RAM is only related to the motherboard, which is now empty.
        assert_eq!(state.get(Slot::Ram).map(|p| p.id.as_str()), Some("r"));
    }

    #[test]
    fn clearing_never_cascades() {
        let mut state = SelectionState::new();
        apply(&mut state, Slot::Cpu, Some(cpu("c", "AM4")));
        apply(&mut state, Slot::Motherboard, Some(board("b", "AM4", MemoryType::Ddr4)));
        assert!(apply(&mut state, Slot::Cpu, None).is_empty());
        assert!(state.is_filled(Slot::Motherboard));
    }

    #[test]
    fn set_slot_leaves_input_untouched() {
        let empty = SelectionState::new();
        let next = set_slot(&empty, Slot::Cpu, Some(cpu("c", "AM5")));
        assert!(empty.is_empty());
        assert!(next.is_filled(Slot::Cpu));
    }

    #[test]
    fn reduce_handles_every_action() {
        let state = reduce(&SelectionState::new(), SelectionAction::Set(Slot::Cpu, cpu("c", "AM5")));
        let state = reduce(
            &state,
            SelectionAction::Set(Slot::Motherboard, board("b", "AM5", MemoryType::Ddr5)),
        );
        assert_eq!(state.selected().count(), 2);
        let state = reduce(&state, SelectionAction::Clear(Slot::Cpu));
        assert!(!state.is_filled(Slot::Cpu));
        let state = reduce(&state, SelectionAction::Reset);
        assert!(state.is_empty());
    }

    #[test]
    fn secondary_os_is_never_constrained() {
        let os = part(
            "linux",
            PartSpec::Os(OsSpec {
                family: OsFamily::Linux,
                series: None,
            }),
        );
        let mut state = SelectionState::new();
        assert!(apply(&mut state, Slot::OsSecondary, Some(os)).is_empty());
        assert!(state.is_filled(Slot::OsSecondary));
    }

    #[test]
    #[should_panic(expected = "cannot be placed in slot")]
    fn wrong_category_panics() {
        let mut state = SelectionState::new();
        apply(&mut state, Slot::Gpu, Some(cpu("c", "AM5")));
    }
}
