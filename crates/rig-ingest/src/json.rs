//! JSON catalog reading into raw rows.
//!
//! Accepts either a top-level array of row objects or an object with a
//! `parts` array. Scalar values become strings; string arrays become `;`
//! separated lists.

use std::path::Path;

use serde_json::Value;

use crate::error::{IngestError, Result};
use crate::row::RawRow;
use crate::source::read_source;

/// Read a JSON catalog file into raw rows.
pub fn read_json_rows(path: &Path) -> Result<Vec<RawRow>> {
    let bytes = read_source(path)?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| IngestError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    json_rows(&value).map_err(|reason| IngestError::JsonShape {
        path: path.to_path_buf(),
        reason,
    })
}

/// Convert a parsed JSON document into raw rows.
pub fn json_rows(value: &Value) -> std::result::Result<Vec<RawRow>, String> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("parts") {
            Some(Value::Array(items)) => items,
            _ => return Err("expected an array or an object with a 'parts' array".to_string()),
        },
        _ => return Err("expected an array of part objects".to_string()),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(fields) = item else {
                return Err(format!("element {index} is not an object"));
            };
            let mut row = RawRow::new(index + 1);
            for (key, value) in fields {
                if let Some(text) = scalar_text(value) {
                    row.insert(key, &text);
                }
            }
            Ok(row)
        })
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(scalar_text)
                .collect::<Vec<_>>()
                .join(";"),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}
