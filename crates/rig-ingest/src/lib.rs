//! Catalog ingestion for the PC build engine.
//!
//! Inventory sources hand over loosely-typed rows; this crate turns them into
//! an immutable [`rig_model::Catalog`] and reports the rows it had to reject.
//!
//! # Features
//!
//! - **Raw rows**: normalized attribute bags ([`RawRow`]) from any source
//! - **CSV / JSON reading**: header-keyed CSV files and JSON row arrays
//! - **Typed loading**: per-category parsing with explicit rejections
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rig_ingest::load_catalog_file;
//!
//! let load = load_catalog_file(Path::new("inventory/catalog.csv"))?;
//! for rejected in &load.rejected {
//!     eprintln!("line {}: {}", rejected.line, rejected.error);
//! }
//! let catalog = load.catalog;
//! ```

mod csv;
mod error;
mod json;
mod loader;
mod row;
mod source;

// === Error Types ===
pub use error::{IngestError, LoadError, Result};

// === Raw Rows ===
pub use row::{RawRow, normalize_key, split_list};

// === Source Reading ===
pub use crate::csv::{parse_csv_rows, read_csv_rows};
pub use json::{json_rows, read_json_rows};
pub use source::{MAX_CATALOG_FILE_SIZE, load_catalog_file, read_rows};

// === Loading ===
pub use loader::{CatalogLoad, RejectedRow, load_catalog, parse_part};
