//! Power and cost aggregation.
//!
//! Totals are a pure function of the selection and are recomputed on every
//! query; nothing here caches.

use serde::Serialize;

use rig_model::{PowerProfile, SelectionState, Slot};

/// Derived build totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of every filled slot's price, in the smallest currency unit.
    pub total_price: u64,
    pub estimated_wattage: u32,
    pub psu_wattage: Option<u32>,
    /// True when no PSU is selected or the PSU covers the estimate.
    pub is_power_sufficient: bool,
    /// Estimate rounded up to the profile's PSU step.
    pub recommended_psu_wattage: u32,
}

impl Totals {
    /// PSU wattage minus the estimate. Negative means a shortfall.
    pub fn power_headroom(&self) -> Option<i64> {
        self.psu_wattage
            .map(|psu| i64::from(psu) - i64::from(self.estimated_wattage))
    }
}

/// Aggregate with the default power profile.
pub fn aggregate(state: &SelectionState) -> Totals {
    aggregate_with(state, &PowerProfile::default())
}

pub fn aggregate_with(state: &SelectionState, profile: &PowerProfile) -> Totals {
    let total_price = state
        .selected()
        .fold(0u64, |sum, (_, part)| sum.saturating_add(part.price));
    let estimated_wattage = estimate_wattage(state, profile);
    let psu_wattage = state
        .get(Slot::Psu)
        .and_then(|part| part.as_psu())
        .map(|psu| psu.wattage);

    Totals {
        total_price,
        estimated_wattage,
        psu_wattage,
        is_power_sufficient: psu_wattage.is_none_or(|watts| watts >= estimated_wattage),
        recommended_psu_wattage: round_up(estimated_wattage, profile.psu_step),
    }
}

/// CPU and GPU draw plus fixed overheads for the filled slots and the
/// safety buffer. A build with no CPU, GPU or motherboard draws nothing.
/// Saturates at `u32::MAX` so an extreme rating reads as unpowerable.
fn estimate_wattage(state: &SelectionState, profile: &PowerProfile) -> u32 {
    let powered = [Slot::Cpu, Slot::Gpu, Slot::Motherboard]
        .into_iter()
        .any(|slot| state.is_filled(slot));
    if !powered {
        return 0;
    }

    let cpu = state
        .get(Slot::Cpu)
        .and_then(|part| part.as_cpu())
        .map_or(0, |cpu| cpu.wattage);
    let gpu = state
        .get(Slot::Gpu)
        .and_then(|part| part.as_gpu())
        .map_or(0, |gpu| gpu.wattage);

    let overheads = [
        (Slot::Motherboard, profile.motherboard_overhead),
        (Slot::Ram, profile.ram_overhead),
        (Slot::Storage, profile.storage_overhead),
        (Slot::Cooler, profile.cooler_overhead),
    ];
    let overhead = overheads
        .into_iter()
        .filter(|(slot, _)| state.is_filled(*slot))
        .fold(0u32, |sum, (_, watts)| sum.saturating_add(watts));

    cpu.saturating_add(gpu)
        .saturating_add(overhead)
        .saturating_add(profile.safety_buffer)
}

fn round_up(value: u32, step: u32) -> u32 {
    if step == 0 {
        return value;
    }
    value.div_ceil(step).saturating_mul(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up() {
        assert_eq!(round_up(0, 50), 0);
        assert_eq!(round_up(525, 50), 550);
        assert_eq!(round_up(550, 50), 550);
        assert_eq!(round_up(551, 0), 551);
        assert_eq!(round_up(u32::MAX, 50), u32::MAX);
        assert_eq!(round_up(u32::MAX - 10, 50), u32::MAX);
    }

    #[test]
    fn empty_build_draws_nothing() {
        let totals = aggregate(&SelectionState::new());
        assert_eq!(totals.total_price, 0);
        assert_eq!(totals.estimated_wattage, 0);
        assert_eq!(totals.psu_wattage, None);
        assert!(totals.is_power_sufficient);
        assert_eq!(totals.power_headroom(), None);
        assert_eq!(totals.recommended_psu_wattage, 0);
    }
}
