//! Compatibility predicate set.
//!
//! Each [`PairRule`] covers one unordered pair of categories and is checked
//! in both directions with the same condition, so selecting either side
//! filters the other. Rules are evaluated in [`PairRule::ALL`] order; that
//! order decides which message wins under the first-violation policy.

mod cooling;
mod form_factor;
mod gpu_clearance;
mod memory;
pub mod power;
mod radiator;
mod socket;

use rig_model::{Category, Part, RuleKind, SelectionState, Slot, Violation};

/// A physical or thermal relationship between two categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairRule {
    CpuMotherboard,
    MotherboardRam,
    CabinetMotherboard,
    CabinetCooler,
    CabinetGpu,
    CpuCooler,
}

impl PairRule {
    pub const ALL: [PairRule; 6] = [
        PairRule::CpuMotherboard,
        PairRule::MotherboardRam,
        PairRule::CabinetMotherboard,
        PairRule::CabinetCooler,
        PairRule::CabinetGpu,
        PairRule::CpuCooler,
    ];

    pub fn categories(&self) -> (Category, Category) {
        match self {
            PairRule::CpuMotherboard => (Category::Cpu, Category::Motherboard),
            PairRule::MotherboardRam => (Category::Motherboard, Category::Ram),
            PairRule::CabinetMotherboard => (Category::Cabinet, Category::Motherboard),
            PairRule::CabinetCooler => (Category::Cabinet, Category::Cooler),
            PairRule::CabinetGpu => (Category::Cabinet, Category::Gpu),
            PairRule::CpuCooler => (Category::Cpu, Category::Cooler),
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            PairRule::CpuMotherboard => RuleKind::Socket,
            PairRule::MotherboardRam => RuleKind::MemoryType,
            PairRule::CabinetMotherboard => RuleKind::FormFactor,
            PairRule::CabinetCooler => RuleKind::Radiator,
            PairRule::CabinetGpu => RuleKind::GpuClearance,
            PairRule::CpuCooler => RuleKind::Cooling,
        }
    }

    /// Hard rules block selection and drive the cascade.
    pub fn is_hard(&self) -> bool {
        self.kind().severity() == rig_model::Severity::Hard
    }

    /// The category on the other side of the pair, if `category` is on one.
    pub fn counterpart(&self, category: Category) -> Option<Category> {
        let (a, b) = self.categories();
        if category == a {
            Some(b)
        } else if category == b {
            Some(a)
        } else {
            None
        }
    }

    /// Check `candidate` against a part already selected on the other side.
    pub fn check(&self, candidate: &Part, selected: &Part) -> Option<Violation> {
        match self {
            PairRule::CpuMotherboard => socket::check(candidate, selected),
            PairRule::MotherboardRam => memory::check(candidate, selected),
            PairRule::CabinetMotherboard => form_factor::check(candidate, selected),
            PairRule::CabinetCooler => radiator::check(candidate, selected),
            PairRule::CabinetGpu => gpu_clearance::check(candidate, selected),
            PairRule::CpuCooler => cooling::check(candidate, selected),
        }
    }
}

/// Rules that involve `category`, in evaluation order.
pub fn rules_for(category: Category) -> impl Iterator<Item = (PairRule, Category)> {
    PairRule::ALL
        .into_iter()
        .filter_map(move |rule| rule.counterpart(category).map(|other| (rule, other)))
}

/// Every violation `candidate` would have against the current picks.
///
/// A counterpart slot that is empty applies no constraint. The PSU power
/// check compares against `estimated_wattage`, which the caller derives from
/// the same selection.
pub fn evaluate(candidate: &Part, state: &SelectionState, estimated_wattage: u32) -> Vec<Violation> {
    let category = candidate.category();
    let mut violations: Vec<Violation> = rules_for(category)
        .filter_map(|(rule, other)| {
            let selected = state.get(Slot::primary_for(other))?;
            rule.check(candidate, selected)
        })
        .collect();

    if category == Category::Psu {
        violations.extend(power::check(candidate, estimated_wattage));
    }

    // Hard findings first so they own the reason line.
    violations.sort_by_key(|v| v.severity());
    violations
}

/// Slots whose current part would fail a hard rule against `part`.
///
/// This is the neighbour set the one-level cascade clears.
pub fn hard_conflicts(part: &Part, state: &SelectionState) -> Vec<(Slot, Violation)> {
    rules_for(part.category())
        .filter(|(rule, _)| rule.is_hard())
        .filter_map(|(rule, other)| {
            let slot = Slot::primary_for(other);
            let neighbour = state.get(slot)?;
            rule.check(neighbour, part).map(|violation| (slot, violation))
        })
        .collect()
}
