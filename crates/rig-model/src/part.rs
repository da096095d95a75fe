//! Typed catalog parts.
//!
//! Every part shares a small base record (id, brand, price, stock flag) and
//! carries exactly one category-specific spec. The category is derived from
//! the spec variant, so a part cannot disagree with its own category.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::attributes::{FormFactor, MemoryType, OsFamily, OsSeries, RadiatorSize, Socket};
use crate::category::Category;

/// Power draw assumed for a CPU row that does not state one.
pub const DEFAULT_CPU_WATTAGE: u32 = 65;

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Price in the smallest currency unit.
    pub price: u64,
    pub in_stock: bool,
    #[serde(flatten)]
    pub spec: PartSpec,
}

impl Part {
    pub fn category(&self) -> Category {
        self.spec.category()
    }

    pub fn as_cpu(&self) -> Option<&CpuSpec> {
        match &self.spec {
            PartSpec::Cpu(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_motherboard(&self) -> Option<&MotherboardSpec> {
        match &self.spec {
            PartSpec::Motherboard(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_gpu(&self) -> Option<&GpuSpec> {
        match &self.spec {
            PartSpec::Gpu(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_ram(&self) -> Option<&RamSpec> {
        match &self.spec {
            PartSpec::Ram(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_cooler(&self) -> Option<&CoolerSpec> {
        match &self.spec {
            PartSpec::Cooler(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_psu(&self) -> Option<&PsuSpec> {
        match &self.spec {
            PartSpec::Psu(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_cabinet(&self) -> Option<&CabinetSpec> {
        match &self.spec {
            PartSpec::Cabinet(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_os(&self) -> Option<&OsSpec> {
        match &self.spec {
            PartSpec::Os(spec) => Some(spec),
            _ => None,
        }
    }
}

/// Category-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum PartSpec {
    Cpu(CpuSpec),
    Motherboard(MotherboardSpec),
    Gpu(GpuSpec),
    Ram(RamSpec),
    Storage,
    Cooler(CoolerSpec),
    Psu(PsuSpec),
    Cabinet(CabinetSpec),
    Monitor,
    Keyboard,
    Mouse,
    Combo,
    Os(OsSpec),
}

impl PartSpec {
    pub fn category(&self) -> Category {
        match self {
            PartSpec::Cpu(_) => Category::Cpu,
            PartSpec::Motherboard(_) => Category::Motherboard,
            PartSpec::Gpu(_) => Category::Gpu,
            PartSpec::Ram(_) => Category::Ram,
            PartSpec::Storage => Category::Storage,
            PartSpec::Cooler(_) => Category::Cooler,
            PartSpec::Psu(_) => Category::Psu,
            PartSpec::Cabinet(_) => Category::Cabinet,
            PartSpec::Monitor => Category::Monitor,
            PartSpec::Keyboard => Category::Keyboard,
            PartSpec::Mouse => Category::Mouse,
            PartSpec::Combo => Category::Combo,
            PartSpec::Os(_) => Category::Os,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuSpec {
    pub socket: Socket,
    pub wattage: u32,
    pub supports_integrated_graphics: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotherboardSpec {
    pub socket: Socket,
    pub memory_type: MemoryType,
    pub form_factor: FormFactor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuSpec {
    pub wattage: u32,
    /// Video memory in GB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vram: Option<u32>,
    pub length_mm: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RamSpec {
    pub memory_type: MemoryType,
    /// Kit capacity in GB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoolerSpec {
    pub radiator_size: RadiatorSize,
    /// Heat the cooler is rated to dissipate, in watts. Unrated coolers skip
    /// the CPU sufficiency check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tdp_rating: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PsuSpec {
    pub wattage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetSpec {
    pub supported_form_factors: BTreeSet<FormFactor>,
    /// Radiator sizes with a mounting position. Air coolers always fit.
    pub supported_radiator_sizes: BTreeSet<RadiatorSize>,
    pub max_gpu_length_mm: u32,
}

impl CabinetSpec {
    pub fn fits_form_factor(&self, form_factor: FormFactor) -> bool {
        self.supported_form_factors.contains(&form_factor)
    }

    pub fn fits_radiator(&self, size: RadiatorSize) -> bool {
        size.is_air() || self.supported_radiator_sizes.contains(&size)
    }

    pub fn fits_gpu_length(&self, length_mm: u32) -> bool {
        length_mm <= self.max_gpu_length_mm
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OsSpec {
    pub family: OsFamily,
    /// Edition; only Windows has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<OsSeries>,
}
