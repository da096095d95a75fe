use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use rig_core::{BuildSnapshot, CartHandoff, Configurator};
use rig_ingest::{CatalogLoad, load_catalog_file};
use rig_model::{CandidateList, Slot};

use crate::cli::{BuildArgs, CandidatesArgs, CatalogArgs, Pick};
use crate::config::{apply_overrides, load_options};

/// Slots one pick cleared through the cascade.
#[derive(Debug, Clone)]
pub struct CascadeClear {
    pub pick: Pick,
    pub cleared: Vec<Slot>,
}

/// Result of the `build` command.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub snapshot: BuildSnapshot,
    pub cascades: Vec<CascadeClear>,
}

impl BuildReport {
    /// Conflicts or a PSU below the estimate.
    pub fn has_failures(&self) -> bool {
        self.snapshot.review.has_conflicts() || !self.snapshot.totals.is_power_sufficient
    }
}

pub fn run_catalog(args: &CatalogArgs) -> Result<CatalogLoad> {
    load_catalog(&args.catalog)
}

pub fn run_candidates(args: &CandidatesArgs, config: Option<&Path>) -> Result<CandidateList> {
    let (session, _) = assemble(&args.build, config)?;
    let mut list = session.candidates(args.category);
    if args.selectable_only {
        list.candidates.retain(|candidate| candidate.is_selectable());
    }
    Ok(list)
}

pub fn run_build(args: &BuildArgs, config: Option<&Path>) -> Result<BuildReport> {
    let (session, cascades) = assemble(args, config)?;
    Ok(BuildReport {
        snapshot: session.snapshot(),
        cascades,
    })
}

pub fn run_handoff(args: &BuildArgs, config: Option<&Path>) -> Result<CartHandoff> {
    let (session, _) = assemble(args, config)?;
    session.handoff().context("build cart hand-off")
}

fn load_catalog(path: &Path) -> Result<CatalogLoad> {
    let span = info_span!("catalog", path = %path.display());
    let _guard = span.enter();
    let load = load_catalog_file(path)
        .with_context(|| format!("load catalog {}", path.display()))?;
    if load.has_rejections() {
        warn!(rejected = load.rejected.len(), "catalog has rejected rows");
    }
    Ok(load)
}

/// Load the catalog and options, then apply every pick in order.
fn assemble(args: &BuildArgs, config: Option<&Path>) -> Result<(Configurator, Vec<CascadeClear>)> {
    let options = apply_overrides(load_options(config)?, args.reasons);
    let load = load_catalog(&args.catalog)?;
    let mut session = Configurator::with_options(Arc::new(load.catalog), options);

    let mut cascades = Vec::new();
    for pick in &args.picks {
        let result = if args.strict {
            session.pick_checked(pick.slot, &pick.id)
        } else {
            session.pick(pick.slot, &pick.id)
        };
        let cleared = result.with_context(|| format!("pick {}={}", pick.slot, pick.id))?;
        if !cleared.is_empty() {
            info!(slot = %pick.slot, part = %pick.id, cleared = cleared.len(), "pick cleared slots");
            cascades.push(CascadeClear {
                pick: pick.clone(),
                cleared,
            });
        }
    }
    Ok((session, cascades))
}
