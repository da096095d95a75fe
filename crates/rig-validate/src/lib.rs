//! Compatibility rules for PC component selections.
//!
//! The crate is pure: every function takes the current
//! [`rig_model::SelectionState`] by reference and returns findings as data.
//! Nothing here raises for an incompatible combination.

pub mod checks;
mod review;

pub use checks::{PairRule, evaluate, hard_conflicts, rules_for};
pub use review::{
    BuildReview, ESSENTIAL_SLOTS, ReviewIssue, ReviewIssueKind, active_constraints, review_build,
};
