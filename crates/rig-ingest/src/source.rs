//! Catalog source files.

use std::path::Path;

use crate::csv::read_csv_rows;
use crate::error::{IngestError, Result};
use crate::json::read_json_rows;
use crate::loader::{CatalogLoad, load_catalog};
use crate::row::RawRow;

/// Maximum catalog file size (64 MB).
pub const MAX_CATALOG_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Read raw rows from a `.csv` or `.json` file, chosen by extension.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => read_csv_rows(path),
        Some("json") => read_json_rows(path),
        _ => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Read and load a catalog file in one step.
pub fn load_catalog_file(path: &Path) -> Result<CatalogLoad> {
    let rows = read_rows(path)?;
    Ok(load_catalog(rows))
}

/// Read a whole source file after checking it exists and fits the limit.
pub(crate) fn read_source(path: &Path) -> Result<Vec<u8>> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if metadata.len() > MAX_CATALOG_FILE_SIZE {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: MAX_CATALOG_FILE_SIZE,
        });
    }

    std::fs::read(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
