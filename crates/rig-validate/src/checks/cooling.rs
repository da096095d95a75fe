//! CPU ↔ cooler thermal headroom (advisory).
//!
//! An unrated cooler is not checked.

use rig_model::{Category, Part, RuleKind, Violation};

pub fn check(candidate: &Part, selected: &Part) -> Option<Violation> {
    let (rating, draw, against) = match (candidate.category(), selected.category()) {
        (Category::Cooler, Category::Cpu) => (
            candidate.as_cooler()?.tdp_rating?,
            selected.as_cpu()?.wattage,
            Category::Cpu,
        ),
        (Category::Cpu, Category::Cooler) => (
            selected.as_cooler()?.tdp_rating?,
            candidate.as_cpu()?.wattage,
            Category::Cooler,
        ),
        _ => return None,
    };

    if rating >= draw {
        return None;
    }
    let message = match against {
        Category::Cpu => format!("Too Weak ({rating}W rating < {draw}W CPU)"),
        _ => format!("Cooler too weak ({rating}W rating < {draw}W CPU)"),
    };
    Some(Violation::new(RuleKind::Cooling, Some(against), message))
}
