//! Motherboard ↔ RAM memory generation check.

use rig_model::{Category, Part, RuleKind, Violation};

/// Memory type must match in both directions.
pub fn check(candidate: &Part, selected: &Part) -> Option<Violation> {
    let (candidate_type, required, against) = match (candidate.category(), selected.category()) {
        (Category::Ram, Category::Motherboard) => (
            candidate.as_ram()?.memory_type,
            selected.as_motherboard()?.memory_type,
            Category::Motherboard,
        ),
        (Category::Motherboard, Category::Ram) => (
            candidate.as_motherboard()?.memory_type,
            selected.as_ram()?.memory_type,
            Category::Ram,
        ),
        _ => return None,
    };

    if candidate_type == required {
        return None;
    }
    Some(Violation::new(
        RuleKind::MemoryType,
        Some(against),
        format!("Requires memory type {required}"),
    ))
}
