//! Configuration options for the compatibility engine.

use serde::{Deserialize, Serialize};

/// How a candidate's reason is built when several rules fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonPolicy {
    /// Report only the first violated rule, in evaluation order.
    #[default]
    FirstViolation,
    /// Join every violated rule's message with "; ".
    Concatenate,
}

/// Constants used by the power estimate.
///
/// All values are watts. A slot's overhead only counts while that slot is
/// filled; the safety buffer is added once when any core component is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerProfile {
    pub motherboard_overhead: u32,
    pub ram_overhead: u32,
    pub storage_overhead: u32,
    pub cooler_overhead: u32,
    pub safety_buffer: u32,
    /// PSU recommendations are rounded up to a multiple of this.
    pub psu_step: u32,
}

impl Default for PowerProfile {
    fn default() -> Self {
        Self {
            motherboard_overhead: 50,
            ram_overhead: 15,
            storage_overhead: 10,
            cooler_overhead: 10,
            safety_buffer: 100,
            psu_step: 50,
        }
    }
}

/// Options controlling engine behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub reasons: ReasonPolicy,
    pub power: PowerProfile,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reason_policy(mut self, policy: ReasonPolicy) -> Self {
        self.reasons = policy;
        self
    }

    #[must_use]
    pub fn with_power_profile(mut self, power: PowerProfile) -> Self {
        self.power = power;
        self
    }
}
