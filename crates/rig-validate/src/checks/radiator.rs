//! Cabinet ↔ cooler radiator mounting check.
//!
//! Air coolers never need a radiator mount and always pass.

use rig_model::attributes::join_display;
use rig_model::{Category, Part, RuleKind, Violation};

pub fn check(candidate: &Part, selected: &Part) -> Option<Violation> {
    match (candidate.category(), selected.category()) {
        (Category::Cooler, Category::Cabinet) => {
            let (cooler, cabinet) = (candidate.as_cooler()?, selected.as_cabinet()?);
            if cabinet.fits_radiator(cooler.radiator_size) {
                return None;
            }
            let supported = if cabinet.supported_radiator_sizes.is_empty() {
                "air coolers only".to_string()
            } else {
                join_display(&cabinet.supported_radiator_sizes)
            };
            Some(Violation::new(
                RuleKind::Radiator,
                Some(Category::Cabinet),
                format!("Cabinet supports: {supported}"),
            ))
        }
        (Category::Cabinet, Category::Cooler) => {
            let (cabinet, cooler) = (candidate.as_cabinet()?, selected.as_cooler()?);
            if cabinet.fits_radiator(cooler.radiator_size) {
                return None;
            }
            Some(Violation::new(
                RuleKind::Radiator,
                Some(Category::Cooler),
                format!("Doesn't support {} radiator", cooler.radiator_size),
            ))
        }
        _ => None,
    }
}
