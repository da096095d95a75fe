//! PSU ↔ estimated build draw (advisory).

use rig_model::{Part, RuleKind, Violation};

/// Flag a PSU that cannot cover `estimated_wattage`.
pub fn check(candidate: &Part, estimated_wattage: u32) -> Option<Violation> {
    let psu = candidate.as_psu()?;
    if psu.wattage >= estimated_wattage {
        return None;
    }
    Some(Violation::new(
        RuleKind::Power,
        None,
        format!(
            "Insufficient wattage ({}W < {}W estimated)",
            psu.wattage, estimated_wattage
        ),
    ))
}
