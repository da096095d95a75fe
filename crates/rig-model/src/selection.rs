//! The mutable build: one nullable slot per position.

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::category::Slot;
use crate::part::Part;

/// Current picks for a configuration session.
///
/// Each slot holds at most one part. A `SelectionState` is a plain value:
/// cloning it yields an independent snapshot that later mutations of the
/// original cannot reach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    slots: [Option<Arc<Part>>; Slot::COUNT],
}

impl SelectionState {
    /// Empty build, every slot null.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&Arc<Part>> {
        self.slots[slot as usize].as_ref()
    }

    pub fn is_filled(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Filled slots in display order.
    pub fn selected(&self) -> impl Iterator<Item = (Slot, &Arc<Part>)> {
        Slot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|part| (slot, part)))
    }

    /// Write a slot without touching any other slot.
    ///
    /// This is the raw storage primitive. Sessions go through the cascading
    /// setter in `rig-core`; calling this directly can produce a build whose
    /// slots contradict each other.
    ///
    /// # Panics
    ///
    /// Panics if `part` belongs to a category the slot does not accept. That
    /// is a caller bug, not a user-data condition.
    pub fn place(&mut self, slot: Slot, part: Option<Arc<Part>>) -> Option<Arc<Part>> {
        if let Some(part) = &part {
            assert_eq!(
                part.category(),
                slot.category(),
                "part {} ({}) cannot be placed in slot {}",
                part.id,
                part.category(),
                slot
            );
        }
        std::mem::replace(&mut self.slots[slot as usize], part)
    }

    /// Clear every slot.
    pub fn clear_all(&mut self) {
        self.slots = Default::default();
    }
}

impl Serialize for SelectionState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Slot::COUNT))?;
        for slot in Slot::ALL {
            map.serialize_entry(slot.key(), &self.get(slot).map(|part| part.as_ref()))?;
        }
        map.end()
    }
}
