//! Engine options from a TOML file.
//!
//! ```toml
//! reasons = "concatenate"
//!
//! [power]
//! safety_buffer = 150
//! psu_step = 100
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rig_model::{EngineOptions, ReasonPolicy};

use crate::cli::ReasonsArg;

pub fn load_options(path: Option<&Path>) -> Result<EngineOptions> {
    let Some(path) = path else {
        return Ok(EngineOptions::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let options: EngineOptions =
        toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?options, "loaded engine options");
    Ok(options)
}

/// Apply command-line overrides on top of file options.
pub fn apply_overrides(options: EngineOptions, reasons: Option<ReasonsArg>) -> EngineOptions {
    match reasons {
        Some(ReasonsArg::First) => options.with_reason_policy(ReasonPolicy::FirstViolation),
        Some(ReasonsArg::All) => options.with_reason_policy(ReasonPolicy::Concatenate),
        None => options,
    }
}
