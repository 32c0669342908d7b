//! Error types for the catalog crate.
//!
//! Loading a catalog can fail as a whole (file missing, unreadable, not JSON)
//! or record by record (a field is missing or carries an unknown value).
//! Both cases share one enum so callers can log and report them uniformly.

use thiserror::Error;

/// Errors that can occur while loading and validating an idea catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file does not exist at the configured path
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid JSON
    #[error("Failed to parse {file}: {source}")]
    JsonError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// The file is valid JSON but the top-level value is not an array
    #[error("Expected a JSON array of ideas in {file} but found {found}")]
    NotAnArray { file: String, found: &'static str },

    /// A record lacks one of the required fields
    #[error("Record {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    /// A field had a value outside its fixed set (e.g. an unknown difficulty)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// A record is structurally wrong or violates an invariant
    #[error("Record {index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
