//! CSV file reading into raw rows.
//!
//! The first record is the header. Each header becomes an attribute key;
//! empty cells are treated as absent attributes.

use std::path::Path;

use ::csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{IngestError, Result};
use crate::row::RawRow;
use crate::source::read_source;

/// Read a CSV catalog file into raw rows.
pub fn read_csv_rows(path: &Path) -> Result<Vec<RawRow>> {
    let bytes = read_source(path)?;
    parse_csv_rows(&bytes).map_err(|message| IngestError::CsvParse {
        path: path.to_path_buf(),
        message,
    })
}

/// Parse CSV bytes into raw rows.
///
/// Returns the parser message on failure so callers can attach a path.
pub fn parse_csv_rows(bytes: &[u8]) -> std::result::Result<Vec<RawRow>, String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let headers: StringRecord = reader.headers().map_err(|e| e.to_string())?.clone();
    if headers.iter().all(str::is_empty) {
        return Err("missing header row".to_string());
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record
            .position()
            .map_or(rows.len() + 2, |pos| pos.line() as usize);
        rows.push(RawRow::from_pairs(line, headers.iter().zip(record.iter())));
    }
    Ok(rows)
}
