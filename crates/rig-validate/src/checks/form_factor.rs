//! Cabinet ↔ motherboard form factor check.

use rig_model::attributes::join_display;
use rig_model::{Category, Part, RuleKind, Violation};

/// The cabinet must list the motherboard's form factor.
pub fn check(candidate: &Part, selected: &Part) -> Option<Violation> {
    match (candidate.category(), selected.category()) {
        (Category::Motherboard, Category::Cabinet) => {
            let (board, cabinet) = (candidate.as_motherboard()?, selected.as_cabinet()?);
            if cabinet.fits_form_factor(board.form_factor) {
                return None;
            }
            Some(Violation::new(
                RuleKind::FormFactor,
                Some(Category::Cabinet),
                format!(
                    "Cabinet fits only: {}",
                    join_display(&cabinet.supported_form_factors)
                ),
            ))
        }
        (Category::Cabinet, Category::Motherboard) => {
            let (cabinet, board) = (candidate.as_cabinet()?, selected.as_motherboard()?);
            if cabinet.fits_form_factor(board.form_factor) {
                return None;
            }
            Some(Violation::new(
                RuleKind::FormFactor,
                Some(Category::Motherboard),
                format!("Too small for {} Mobo", board.form_factor),
            ))
        }
        _ => None,
    }
}
