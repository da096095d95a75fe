//! Whole-build review.
//!
//! Candidate filtering answers "can I pick this?". The review answers "is
//! this build ready?": it lists advisories, remaining gaps and any hard
//! conflict left in a state that was assembled without the cascade.

use serde::Serialize;

use rig_model::{Category, SelectionState, Slot};

use crate::checks::{self, PairRule};

/// Slots a bootable build needs. A discrete GPU is handled separately since
/// integrated graphics can stand in for it.
pub const ESSENTIAL_SLOTS: [Slot; 6] = [
    Slot::Cpu,
    Slot::Motherboard,
    Slot::Ram,
    Slot::Storage,
    Slot::Psu,
    Slot::Cabinet,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewIssueKind {
    /// Two selected parts fail a hard rule.
    Conflict,
    /// PSU below the estimated draw.
    PowerShortfall,
    /// Cooler rated below the CPU draw.
    CoolingShortfall,
    /// No GPU and the CPU has no integrated graphics.
    NoDisplayOutput,
    /// A selected part is out of stock.
    OutOfStock,
    /// An essential slot is empty.
    MissingComponent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewIssue {
    pub kind: ReviewIssueKind,
    pub slot: Option<Slot>,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReview {
    pub issues: Vec<ReviewIssue>,
}

impl BuildReview {
    pub fn has_conflicts(&self) -> bool {
        self.count(ReviewIssueKind::Conflict) > 0
    }

    /// True when nothing essential is missing and the build can drive a
    /// display.
    pub fn is_complete(&self) -> bool {
        self.count(ReviewIssueKind::MissingComponent) == 0
            && self.count(ReviewIssueKind::NoDisplayOutput) == 0
    }

    pub fn count(&self, kind: ReviewIssueKind) -> usize {
        self.issues.iter().filter(|issue| issue.kind == kind).count()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, kind: ReviewIssueKind, slot: Option<Slot>, message: String) {
        self.issues.push(ReviewIssue {
            kind,
            slot,
            message,
        });
    }
}

/// Review a selection against every rule plus the completeness checks.
pub fn review_build(state: &SelectionState, estimated_wattage: u32) -> BuildReview {
    let mut review = BuildReview::default();

    for rule in PairRule::ALL {
        let (left, right) = rule.categories();
        let (left_slot, right_slot) = (Slot::primary_for(left), Slot::primary_for(right));
        let (Some(left_part), Some(right_part)) = (state.get(left_slot), state.get(right_slot))
        else {
            continue;
        };
        // Check from the downstream side so the message names the upstream part.
        let Some(violation) = rule.check(right_part, left_part) else {
            continue;
        };
        let kind = if rule.is_hard() {
            ReviewIssueKind::Conflict
        } else {
            ReviewIssueKind::CoolingShortfall
        };
        review.push(
            kind,
            Some(right_slot),
            format!("{} {}: {}", right.label(), right_part.id, violation.message),
        );
    }

    if let Some(psu) = state.get(Slot::Psu)
        && let Some(violation) = checks::power::check(psu, estimated_wattage)
    {
        review.push(
            ReviewIssueKind::PowerShortfall,
            Some(Slot::Psu),
            format!("PSU {}: {}", psu.id, violation.message),
        );
    }

    if let Some(cpu) = state.get(Slot::Cpu).and_then(|part| part.as_cpu())
        && !state.is_filled(Slot::Gpu)
        && !cpu.supports_integrated_graphics
    {
        review.push(
            ReviewIssueKind::NoDisplayOutput,
            Some(Slot::Gpu),
            "No display output: CPU has no integrated graphics and no GPU is selected"
                .to_string(),
        );
    }

    for (slot, part) in state.selected() {
        if !part.in_stock {
            review.push(
                ReviewIssueKind::OutOfStock,
                Some(slot),
                format!("{} {} is out of stock", slot.category().label(), part.id),
            );
        }
    }

    for slot in ESSENTIAL_SLOTS {
        if !state.is_filled(slot) {
            review.push(
                ReviewIssueKind::MissingComponent,
                Some(slot),
                format!("No {} selected", slot.category().label()),
            );
        }
    }

    tracing::debug!(issues = review.issues.len(), "build reviewed");
    review
}

/// Counterpart categories whose current pick constrains `category`.
///
/// Hosts use this to show which filters are active.
pub fn active_constraints(state: &SelectionState, category: Category) -> Vec<Category> {
    checks::rules_for(category)
        .filter(|(_, other)| state.is_filled(Slot::primary_for(*other)))
        .map(|(_, other)| other)
        .collect()
}
