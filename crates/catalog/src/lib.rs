//! # Catalog Crate
//!
//! This crate holds the project-idea data model and loads the static
//! catalog file.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Idea, Difficulty, ProjectType, Catalog)
//! - **parser**: Parse and validate the JSON catalog records
//! - **index**: Load a Catalog from disk with stage-by-stage logging
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Difficulty, ProjectType};
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("projects.json"))?;
//! let languages = catalog.languages_for(Difficulty::Easy, ProjectType::Cli);
//! println!("{} ideas, easy CLI languages: {:?}", catalog.len(), languages);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{LoadReport, RecordRejection};
pub use types::{Catalog, Difficulty, Idea, ProjectType, WILDCARD_LANGUAGE};
