//! Compatibility findings and candidate decorations.
//!
//! Constraint violations are data, never errors: rules return
//! [`Violation`]s and the candidate filter folds them into a [`Candidate`].

use std::sync::Arc;

use serde::Serialize;

use crate::category::Category;
use crate::options::ReasonPolicy;
use crate::part::Part;

/// Which physical or electrical relationship a finding came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// CPU and motherboard socket must match.
    Socket,
    /// Motherboard and RAM memory generation must match.
    MemoryType,
    /// Cabinet must accept the motherboard form factor.
    FormFactor,
    /// Cabinet must mount the cooler radiator.
    Radiator,
    /// GPU must fit the cabinet's maximum card length.
    GpuClearance,
    /// Cooler rating should cover the CPU draw.
    Cooling,
    /// PSU should cover the estimated build draw.
    Power,
}

impl RuleKind {
    pub fn severity(&self) -> Severity {
        match self {
            RuleKind::Cooling | RuleKind::Power => Severity::Advisory,
            _ => Severity::Hard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Socket => "socket",
            RuleKind::MemoryType => "memory_type",
            RuleKind::FormFactor => "form_factor",
            RuleKind::Radiator => "radiator",
            RuleKind::GpuClearance => "gpu_clearance",
            RuleKind::Cooling => "cooling",
            RuleKind::Power => "power",
        }
    }
}

/// Hard findings block selection; advisory findings only warn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Hard,
    Advisory,
}

/// One violated rule for a candidate, measured against one selected part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub rule: RuleKind,
    /// Category of the selected part the candidate was checked against.
    /// `None` for whole-build rules such as the power budget.
    pub against: Option<Category>,
    pub message: String,
}

impl Violation {
    pub fn new(rule: RuleKind, against: Option<Category>, message: impl Into<String>) -> Self {
        Self {
            rule,
            against,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.rule.severity()
    }

    pub fn is_hard(&self) -> bool {
        self.severity() == Severity::Hard
    }
}

/// Badge shown next to a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateTag {
    /// Blocked by a hard rule.
    Incompatible,
    /// PSU below the estimated draw. Still selectable.
    Underpowered,
    /// Cooler rated below the CPU draw. Still selectable.
    TooWeak,
}

impl CandidateTag {
    pub fn label(&self) -> &'static str {
        match self {
            CandidateTag::Incompatible => "Incompatible",
            CandidateTag::Underpowered => "Underpowered",
            CandidateTag::TooWeak => "Too Weak",
        }
    }
}

/// A catalog part decorated for the current build.
///
/// Decorations are recomputed from scratch on every query and never stored
/// on the part itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub part: Arc<Part>,
    /// False when a hard rule fails or the PSU is below the estimated draw.
    pub is_compatible: bool,
    /// False when the cooler is rated below the selected CPU.
    pub is_sufficient: bool,
    #[serde(rename = "incompatibilityReason", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<CandidateTag>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl Candidate {
    /// A candidate with no findings.
    pub fn unconstrained(part: Arc<Part>) -> Self {
        Self {
            part,
            is_compatible: true,
            is_sufficient: true,
            reason: None,
            tag: None,
            violations: Vec::new(),
        }
    }

    /// Fold rule findings into the candidate flags.
    ///
    /// `violations` must be in evaluation order; under
    /// [`ReasonPolicy::FirstViolation`] the first message becomes the reason.
    pub fn decorate(part: Arc<Part>, violations: Vec<Violation>, policy: ReasonPolicy) -> Self {
        if violations.is_empty() {
            return Self::unconstrained(part);
        }

        let has_hard = violations.iter().any(Violation::is_hard);
        let underpowered = violations.iter().any(|v| v.rule == RuleKind::Power);
        let too_weak = violations.iter().any(|v| v.rule == RuleKind::Cooling);

        let reason = match policy {
            ReasonPolicy::FirstViolation => violations.first().map(|v| v.message.clone()),
            ReasonPolicy::Concatenate => Some(
                violations
                    .iter()
                    .map(|v| v.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
        };

        let tag = if has_hard {
            Some(CandidateTag::Incompatible)
        } else if underpowered {
            Some(CandidateTag::Underpowered)
        } else if too_weak {
            Some(CandidateTag::TooWeak)
        } else {
            None
        };

        Self {
            part,
            is_compatible: !has_hard && !underpowered,
            is_sufficient: !too_weak,
            reason,
            tag,
            violations,
        }
    }

    /// Hard findings block selection; advisory ones do not.
    pub fn is_selectable(&self) -> bool {
        !self.violations.iter().any(Violation::is_hard)
    }

    /// Selectable but carrying a warning badge.
    pub fn has_warning(&self) -> bool {
        self.is_selectable() && !self.violations.is_empty()
    }
}

/// Every catalog part of one category, decorated for the current build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateList {
    pub category: Category,
    pub candidates: Vec<Candidate>,
}

impl CandidateList {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.part.id == id)
    }

    pub fn selectable(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter().filter(|c| c.is_selectable())
    }

    pub fn blocked_count(&self) -> usize {
        self.candidates.iter().filter(|c| !c.is_selectable()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.has_warning()).count()
    }
}
