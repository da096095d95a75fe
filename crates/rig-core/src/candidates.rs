//! Candidate filtering: decorate a category's catalog slice for the
//! current build.

use std::sync::Arc;

use rig_model::{Candidate, CandidateList, Catalog, Category, EngineOptions, SelectionState};
use rig_validate::evaluate;

use crate::aggregate::aggregate_with;

/// Every part of `category`, decorated against `state`.
///
/// Nothing is removed: blocked parts stay in the list with
/// `is_compatible = false` and a reason. The result depends only on the
/// arguments.
pub fn filter_candidates(
    catalog: &Catalog,
    category: Category,
    state: &SelectionState,
    options: &EngineOptions,
) -> CandidateList {
    let estimated_wattage = aggregate_with(state, &options.power).estimated_wattage;
    decorate_category(catalog, category, state, estimated_wattage, options)
}

/// Candidate lists for every category, in [`Category::ALL`] order.
pub fn filter_all(
    catalog: &Catalog,
    state: &SelectionState,
    options: &EngineOptions,
) -> Vec<CandidateList> {
    let estimated_wattage = aggregate_with(state, &options.power).estimated_wattage;
    Category::ALL
        .into_iter()
        .map(|category| decorate_category(catalog, category, state, estimated_wattage, options))
        .collect()
}

fn decorate_category(
    catalog: &Catalog,
    category: Category,
    state: &SelectionState,
    estimated_wattage: u32,
    options: &EngineOptions,
) -> CandidateList {
    let candidates = catalog
        .by_category(category)
        .iter()
        .map(|part| {
            let violations = evaluate(part, state, estimated_wattage);
            Candidate::decorate(Arc::clone(part), violations, options.reasons)
        })
        .collect();
    CandidateList {
        category,
        candidates,
    }
}
