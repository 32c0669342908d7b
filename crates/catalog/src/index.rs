//! Catalog loading from disk.
//!
//! The loader runs once at startup:
//! 1. Check that the file exists
//! 2. Read and parse it
//! 3. Log every rejected record and the final count

use crate::error::{CatalogError, Result};
use crate::parser::{self, LoadReport};
use crate::types::Catalog;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

impl Catalog {
    /// Load a catalog file, logging and discarding invalid records.
    ///
    /// This is the main entry point for the static provider.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::load_with_report(path).map(|(catalog, _)| catalog)
    }

    /// Same as `load_from_file` but also returns what was rejected
    pub fn load_with_report(path: &Path) -> Result<(Self, LoadReport)> {
        if !path.exists() {
            error!("Catalog file missing: {}", path.display());
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        info!("Attempting to load catalog from {}", path.display());
        let source = fs::read_to_string(path)?;

        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let (ideas, report) = parser::parse_catalog(&source, &file).inspect_err(|e| {
            error!("Error reading catalog: {}", e);
        })?;

        for rejection in &report.rejected {
            warn!("Skipping record {} in {}: {}", rejection.index, file, rejection.error);
        }

        info!(
            "Catalog loaded: {} ideas accepted, {} rejected",
            report.accepted,
            report.rejected.len()
        );

        Ok((Catalog::from_ideas(ideas), report))
    }

    /// Parse a catalog held in memory (used by tests and the importer)
    pub fn from_json_str(source: &str) -> Result<Self> {
        let (ideas, report) = parser::parse_catalog(source, "<memory>")?;
        for rejection in &report.rejected {
            warn!("Skipping record {}: {}", rejection.index, rejection.error);
        }
        Ok(Catalog::from_ideas(ideas))
    }
}
