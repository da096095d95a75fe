//! A configuration session over one catalog snapshot.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use rig_model::{CandidateList, Catalog, Category, EngineOptions, Part, SelectionState, Slot};
use rig_validate::{BuildReview, review_build};

use crate::aggregate::{Totals, aggregate_with};
use crate::candidates::{filter_all, filter_candidates};
use crate::error::{HandoffError, SessionError};
use crate::handoff::CartHandoff;
use crate::selection::apply;

/// Everything a host renders after a change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSnapshot {
    pub selections: SelectionState,
    pub candidates: Vec<CandidateList>,
    pub totals: Totals,
    pub review: BuildReview,
}

/// One buyer's build.
///
/// The catalog is shared and read-only; the selection is owned. Every
/// derived value is recomputed from the current selection on request.
#[derive(Debug, Clone)]
pub struct Configurator {
    catalog: Arc<Catalog>,
    options: EngineOptions,
    state: SelectionState,
}

impl Configurator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_options(catalog, EngineOptions::default())
    }

    pub fn with_options(catalog: Arc<Catalog>, options: EngineOptions) -> Self {
        Self {
            catalog,
            options,
            state: SelectionState::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Put catalog part `id` into `slot`, cascading as needed.
    ///
    /// Returns the slots the cascade cleared.
    pub fn pick(&mut self, slot: Slot, id: &str) -> Result<Vec<Slot>, SessionError> {
        let part = self.resolve(slot, id)?;
        let cleared = apply(&mut self.state, slot, Some(part));
        debug!(slot = %slot, part = id, cleared = cleared.len(), "picked part");
        Ok(cleared)
    }

    /// Like [`pick`](Self::pick), but refuses a part a hard rule blocks
    /// instead of clearing its neighbours.
    pub fn pick_checked(&mut self, slot: Slot, id: &str) -> Result<Vec<Slot>, SessionError> {
        let part = self.resolve(slot, id)?;
        if slot.is_constrained() {
            let candidates = self.candidates(part.category());
            if let Some(candidate) = candidates.get(id)
                && !candidate.is_selectable()
            {
                return Err(SessionError::Blocked {
                    id: id.to_string(),
                    reason: candidate.reason.clone().unwrap_or_default(),
                });
            }
        }
        self.pick(slot, id)
    }

    /// Empty `slot`. Returns what it held.
    pub fn clear(&mut self, slot: Slot) -> Option<Arc<Part>> {
        let previous = self.state.get(slot).cloned();
        apply(&mut self.state, slot, None);
        if let Some(part) = &previous {
            debug!(slot = %slot, part = %part.id, "cleared slot");
        }
        previous
    }

    pub fn reset(&mut self) {
        self.state.clear_all();
        debug!("session reset");
    }

    pub fn candidates(&self, category: Category) -> CandidateList {
        filter_candidates(&self.catalog, category, &self.state, &self.options)
    }

    pub fn totals(&self) -> Totals {
        aggregate_with(&self.state, &self.options.power)
    }

    pub fn review(&self) -> BuildReview {
        review_build(&self.state, self.totals().estimated_wattage)
    }

    pub fn snapshot(&self) -> BuildSnapshot {
        let totals = self.totals();
        BuildSnapshot {
            selections: self.state.clone(),
            candidates: filter_all(&self.catalog, &self.state, &self.options),
            totals,
            review: review_build(&self.state, totals.estimated_wattage),
        }
    }

    /// Detached copy of the build for the cart.
    pub fn handoff(&self) -> Result<CartHandoff, HandoffError> {
        CartHandoff::build(&self.state, &self.totals())
    }

    fn resolve(&self, slot: Slot, id: &str) -> Result<Arc<Part>, SessionError> {
        let part = self
            .catalog
            .get(id)
            .ok_or_else(|| SessionError::UnknownPart { id: id.to_string() })?;
        if part.category() != slot.category() {
            return Err(SessionError::WrongSlot {
                id: id.to_string(),
                category: part.category(),
                slot,
            });
        }
        Ok(Arc::clone(part))
    }
}
