//! Error types shared by both providers.
//!
//! The `Display` text of each variant is what the user sees; the flow logs
//! the full error separately.

use catalog::CatalogError;
use thiserror::Error;

/// Operational failures of an idea provider.
///
/// "No idea matched" is not an error: providers return `Ok(None)` for it.
/// Payloads are plain strings so a startup failure can be kept and reported
/// again on every invocation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The static catalog file does not exist
    #[error("Catalog file missing! Pass --catalog with the path to a projects.json file. ({path})")]
    MissingSource { path: String },

    /// The static catalog file could not be read or parsed
    #[error("Database error: {reason}")]
    MalformedSource { reason: String },

    /// The catalog loaded but holds no ideas
    #[error("Database is empty. Please check the catalog file.")]
    EmptyCatalog,

    /// The relational store could not be opened, or was already closed
    #[error("Database connection failed: {reason}")]
    ConnectionUnavailable { reason: String },

    /// A read against the store failed
    #[error("Failed to fetch projects: {reason}")]
    QueryFailure { reason: String },
}

impl From<CatalogError> for ProviderError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::FileNotFound { path } => ProviderError::MissingSource { path },
            other => ProviderError::MalformedSource {
                reason: other.to_string(),
            },
        }
    }
}

impl From<rusqlite::Error> for ProviderError {
    fn from(err: rusqlite::Error) -> Self {
        ProviderError::QueryFailure {
            reason: err.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_missing_source() {
        let err: ProviderError = CatalogError::FileNotFound {
            path: "projects.json".to_string(),
        }
        .into();
        assert_eq!(
            err,
            ProviderError::MissingSource {
                path: "projects.json".to_string()
            }
        );
        let message = err.to_string();
        assert!(message.contains("--catalog"));
        assert!(message.ends_with("(projects.json)"));
    }

    #[test]
    fn test_parse_failure_keeps_the_message() {
        let err: ProviderError = CatalogError::NotAnArray {
            file: "projects.json".to_string(),
            found: "an object",
        }
        .into();
        assert!(err.to_string().starts_with("Database error: Expected a JSON array"));
    }

    #[test]
    fn test_sqlite_error_maps_to_query_failure() {
        let err: ProviderError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, ProviderError::QueryFailure { .. }));
    }
}
