//! Cart hand-off: a detached, priced copy of a finished build.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use rig_model::{Category, Part, SelectionState};
use rig_validate::{ReviewIssueKind, review_build};

use crate::aggregate::Totals;
use crate::error::HandoffError;

/// One selected part as a plain attribute bag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub price: u64,
    pub in_stock: bool,
    /// Category-specific attributes, keyed in camelCase.
    pub attributes: Map<String, Value>,
}

impl PartRecord {
    pub fn from_part(part: &Part) -> Result<Self, HandoffError> {
        let encoded = serde_json::to_value(&part.spec).map_err(|source| HandoffError::Encode {
            id: part.id.clone(),
            source,
        })?;
        let mut attributes = match encoded {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        attributes.remove("category");
        Ok(Self {
            id: part.id.clone(),
            name: part.name.clone(),
            brand: part.brand.clone(),
            category: part.category(),
            price: part.price,
            in_stock: part.in_stock,
            attributes,
        })
    }
}

/// What the cart receives: the selection keyed by slot plus its total.
///
/// Built by value. Later changes to the session never reach a hand-off that
/// was already produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartHandoff {
    pub spec: BTreeMap<String, PartRecord>,
    pub total_price: u64,
}

impl CartHandoff {
    /// Package `state`. Refused when the build is empty or still holds a
    /// hard conflict.
    pub fn build(state: &SelectionState, totals: &Totals) -> Result<Self, HandoffError> {
        if state.is_empty() {
            return Err(HandoffError::EmptyBuild);
        }

        let review = review_build(state, totals.estimated_wattage);
        let conflicts: Vec<_> = review
            .issues
            .iter()
            .filter(|issue| issue.kind == ReviewIssueKind::Conflict)
            .collect();
        if let Some(first) = conflicts.first() {
            return Err(HandoffError::Conflicts {
                count: conflicts.len(),
                first: first.message.clone(),
            });
        }

        let spec = state
            .selected()
            .map(|(slot, part)| Ok((slot.key().to_string(), PartRecord::from_part(part)?)))
            .collect::<Result<BTreeMap<_, _>, HandoffError>>()?;

        Ok(Self {
            spec,
            total_price: totals.total_price,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
