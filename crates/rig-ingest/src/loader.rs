//! Typed catalog loading from raw rows.
//!
//! Each row is parsed into exactly one [`PartSpec`] variant. A row missing an
//! attribute its category requires, or carrying a value that does not parse,
//! is rejected and never reaches the catalog. Nothing is coerced: only the
//! documented defaults (`name`, `in_stock`, CPU `wattage`, CPU
//! `integrated_graphics`) fill in for absent values.

use std::collections::BTreeSet;
use std::str::FromStr;

use tracing::{info, warn};

use rig_model::{
    CabinetSpec, Catalog, Category, CoolerSpec, CpuSpec, DEFAULT_CPU_WATTAGE, FormFactor, GpuSpec,
    ModelError, MotherboardSpec, OsFamily, OsSeries, OsSpec, Part, PartSpec, PsuSpec,
    RadiatorSize, RamSpec,
};

use crate::error::LoadError;
use crate::row::{RawRow, split_list};

const ID: &[&str] = &["id", "part_id", "sku"];
const CATEGORY: &[&str] = &["category", "type"];
const NAME: &[&str] = &["name", "title"];
const BRAND: &[&str] = &["brand", "manufacturer"];
const PRICE: &[&str] = &["price"];
const IN_STOCK: &[&str] = &["in_stock", "stock"];
const SOCKET: &[&str] = &["socket"];
const WATTAGE: &[&str] = &["wattage", "tdp"];
const INTEGRATED_GRAPHICS: &[&str] = &["supports_integrated_graphics", "integrated_graphics"];
const MEMORY_TYPE: &[&str] = &["memory_type"];
const FORM_FACTOR: &[&str] = &["form_factor"];
const VRAM: &[&str] = &["vram"];
const LENGTH_MM: &[&str] = &["length_mm", "length"];
const CAPACITY: &[&str] = &["capacity"];
const RADIATOR_SIZE: &[&str] = &["radiator_size"];
const TDP_RATING: &[&str] = &["tdp_rating"];
const SUPPORTED_FORM_FACTORS: &[&str] = &["supported_form_factors"];
const SUPPORTED_RADIATOR_SIZES: &[&str] = &["supported_radiator_sizes"];
const MAX_GPU_LENGTH_MM: &[&str] = &["max_gpu_length_mm", "max_gpu_length"];
const FAMILY: &[&str] = &["family", "os_family"];
const SERIES: &[&str] = &["series", "edition"];

/// A row that did not make it into the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub line: usize,
    pub id: Option<String>,
    pub error: LoadError,
}

/// Outcome of loading a batch of raw rows.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub rejected: Vec<RejectedRow>,
}

impl CatalogLoad {
    pub fn accepted_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Parse raw rows into a catalog snapshot.
///
/// Malformed rows are collected in [`CatalogLoad::rejected`] for the
/// catalog-sync caller; they never fail the whole load.
pub fn load_catalog(rows: impl IntoIterator<Item = RawRow>) -> CatalogLoad {
    let mut load = CatalogLoad::default();

    for row in rows {
        let id = row.get(ID).map(str::to_string);
        let result = parse_part(&row).and_then(|part| {
            load.catalog.insert(part).map_err(|err| match err {
                ModelError::DuplicateId(id) => LoadError::DuplicateId { id },
            })
        });
        if let Err(error) = result {
            warn!(
                line = row.line,
                id = id.as_deref().unwrap_or("-"),
                %error,
                "rejected catalog row"
            );
            load.rejected.push(RejectedRow {
                line: row.line,
                id,
                error,
            });
        }
    }

    info!(
        accepted = load.accepted_count(),
        rejected = load.rejected.len(),
        "catalog loaded"
    );
    load
}

/// Parse a single raw row into a typed part.
pub fn parse_part(row: &RawRow) -> Result<Part, LoadError> {
    let id = required(row, ID, "id")?.to_string();
    let category_raw = required(row, CATEGORY, "category")?;
    let category = category_raw
        .parse::<Category>()
        .map_err(|_| LoadError::UnknownCategory {
            value: category_raw.to_string(),
        })?;
    let brand = required(row, BRAND, "brand")?.to_string();
    let name = row.get(NAME).map_or_else(|| id.clone(), str::to_string);
    let price = required_parsed::<u64>(row, PRICE, "price", "expected a non-negative integer")?;
    let in_stock = optional_bool(row, IN_STOCK, "in_stock")?.unwrap_or(true);
    let spec = parse_spec(row, category)?;

    Ok(Part {
        id,
        name,
        brand,
        price,
        in_stock,
        spec,
    })
}

fn parse_spec(row: &RawRow, category: Category) -> Result<PartSpec, LoadError> {
    let spec = match category {
        Category::Cpu => PartSpec::Cpu(CpuSpec {
            socket: required_from_str(row, SOCKET, "socket")?,
            wattage: optional_positive(row, WATTAGE, "wattage")?.unwrap_or(DEFAULT_CPU_WATTAGE),
            supports_integrated_graphics: optional_bool(
                row,
                INTEGRATED_GRAPHICS,
                "integrated_graphics",
            )?
            .unwrap_or(false),
        }),
        Category::Motherboard => PartSpec::Motherboard(MotherboardSpec {
            socket: required_from_str(row, SOCKET, "socket")?,
            memory_type: required_from_str(row, MEMORY_TYPE, "memory_type")?,
            form_factor: required_from_str(row, FORM_FACTOR, "form_factor")?,
        }),
        Category::Gpu => PartSpec::Gpu(GpuSpec {
            wattage: required_parsed(row, WATTAGE, "wattage", "expected watts")?,
            vram: optional_parsed(row, VRAM, "vram", "expected gigabytes")?,
            length_mm: required_parsed(row, LENGTH_MM, "length_mm", "expected millimetres")?,
        }),
        Category::Ram => PartSpec::Ram(RamSpec {
            memory_type: required_from_str(row, MEMORY_TYPE, "memory_type")?,
            capacity: optional_parsed(row, CAPACITY, "capacity", "expected gigabytes")?,
        }),
        Category::Cooler => PartSpec::Cooler(CoolerSpec {
            radiator_size: required_from_str(row, RADIATOR_SIZE, "radiator_size")?,
            tdp_rating: optional_parsed(row, TDP_RATING, "tdp_rating", "expected watts")?,
        }),
        Category::Psu => PartSpec::Psu(PsuSpec {
            wattage: required_parsed(row, WATTAGE, "wattage", "expected watts")?,
        }),
        Category::Cabinet => {
            let supported_form_factors: BTreeSet<FormFactor> =
                required_list(row, SUPPORTED_FORM_FACTORS, "supported_form_factors")?;
            let supported_radiator_sizes: BTreeSet<RadiatorSize> =
                optional_list(row, SUPPORTED_RADIATOR_SIZES, "supported_radiator_sizes")?
                    .unwrap_or_default();
            PartSpec::Cabinet(CabinetSpec {
                supported_form_factors,
                supported_radiator_sizes,
                max_gpu_length_mm: required_parsed(
                    row,
                    MAX_GPU_LENGTH_MM,
                    "max_gpu_length_mm",
                    "expected millimetres",
                )?,
            })
        }
        Category::Os => parse_os(row)?,
        Category::Storage => PartSpec::Storage,
        Category::Monitor => PartSpec::Monitor,
        Category::Keyboard => PartSpec::Keyboard,
        Category::Mouse => PartSpec::Mouse,
        Category::Combo => PartSpec::Combo,
    };
    Ok(spec)
}

fn parse_os(row: &RawRow) -> Result<PartSpec, LoadError> {
    let family: OsFamily = required_from_str(row, FAMILY, "family")?;
    let series = match family {
        OsFamily::Windows => Some(required_from_str::<OsSeries>(row, SERIES, "series")?),
        OsFamily::Linux => {
            if row.contains(SERIES) {
                return Err(LoadError::UnexpectedAttribute {
                    attribute: "series".to_string(),
                    reason: "only Windows has an edition".to_string(),
                });
            }
            None
        }
    };
    Ok(PartSpec::Os(OsSpec { family, series }))
}

fn required<'a>(row: &'a RawRow, keys: &[&str], name: &str) -> Result<&'a str, LoadError> {
    row.get(keys).ok_or_else(|| LoadError::missing(name))
}

fn required_from_str<T>(row: &RawRow, keys: &[&str], name: &str) -> Result<T, LoadError>
where
    T: FromStr<Err = String>,
{
    let value = required(row, keys, name)?;
    value
        .parse::<T>()
        .map_err(|reason| LoadError::invalid(name, value, reason))
}

fn required_parsed<T: FromStr>(
    row: &RawRow,
    keys: &[&str],
    name: &str,
    expected: &str,
) -> Result<T, LoadError> {
    let value = required(row, keys, name)?;
    value
        .parse::<T>()
        .map_err(|_| LoadError::invalid(name, value, expected))
}

fn optional_parsed<T: FromStr>(
    row: &RawRow,
    keys: &[&str],
    name: &str,
    expected: &str,
) -> Result<Option<T>, LoadError> {
    row.get(keys)
        .map(|value| {
            value
                .parse::<T>()
                .map_err(|_| LoadError::invalid(name, value, expected))
        })
        .transpose()
}

/// A stated value must be a positive integer; only an absent one defaults.
fn optional_positive(row: &RawRow, keys: &[&str], name: &str) -> Result<Option<u32>, LoadError> {
    row.get(keys)
        .map(|value| match value.parse::<u32>() {
            Ok(parsed) if parsed > 0 => Ok(parsed),
            _ => Err(LoadError::invalid(name, value, "expected a positive wattage")),
        })
        .transpose()
}

fn optional_bool(row: &RawRow, keys: &[&str], name: &str) -> Result<Option<bool>, LoadError> {
    row.get(keys)
        .map(|value| {
            parse_bool(value).ok_or_else(|| LoadError::invalid(name, value, "expected yes/no"))
        })
        .transpose()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

fn optional_list<T>(
    row: &RawRow,
    keys: &[&str],
    name: &str,
) -> Result<Option<BTreeSet<T>>, LoadError>
where
    T: FromStr<Err = String> + Ord,
{
    let Some(value) = row.get(keys) else {
        return Ok(None);
    };
    split_list(value)
        .into_iter()
        .map(|item| {
            item.parse::<T>()
                .map_err(|reason| LoadError::invalid(name, item, reason))
        })
        .collect::<Result<BTreeSet<T>, _>>()
        .map(Some)
}

fn required_list<T>(row: &RawRow, keys: &[&str], name: &str) -> Result<BTreeSet<T>, LoadError>
where
    T: FromStr<Err = String> + Ord,
{
    match optional_list(row, keys, name)? {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(LoadError::missing(name)),
    }
}
