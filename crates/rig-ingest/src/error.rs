//! Error types for catalog ingestion.
//!
//! Two levels are kept apart: [`IngestError`] means a whole source could not
//! be read, [`LoadError`] means a single row was rejected while the rest of
//! the catalog loaded.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a catalog source from being read at all.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Catalog file not found.
    #[error("catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the maximum size limit.
    #[error("file too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File extension is not a supported catalog format.
    #[error("unsupported catalog format for {path} (expected .csv or .json)")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to parse JSON.
    #[error("failed to parse JSON {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    /// JSON parsed but is not an array of row objects.
    #[error("unexpected JSON shape in {path}: {reason}")]
    JsonShape { path: PathBuf, reason: String },
}

/// Why a single catalog row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// A required attribute is absent or blank.
    #[error("missing required attribute '{attribute}'")]
    MissingAttribute { attribute: String },

    /// An attribute is present but cannot be parsed.
    #[error("invalid {attribute} value '{value}': {reason}")]
    InvalidValue {
        attribute: String,
        value: String,
        reason: String,
    },

    /// An attribute is present where the category forbids it.
    #[error("attribute '{attribute}' is not allowed here: {reason}")]
    UnexpectedAttribute { attribute: String, reason: String },

    /// The category column does not name a known category.
    #[error("unknown category '{value}'")]
    UnknownCategory { value: String },

    /// Another accepted row already uses this id.
    #[error("duplicate part id '{id}'")]
    DuplicateId { id: String },
}

impl LoadError {
    pub(crate) fn missing(attribute: &str) -> Self {
        Self::MissingAttribute {
            attribute: attribute.to_string(),
        }
    }

    pub(crate) fn invalid(attribute: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            attribute: attribute.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
