//! # Providers Crate
//!
//! This crate implements the two interchangeable idea providers.
//!
//! ## Components
//!
//! ### Static Catalog Provider
//! The whole catalog lives in memory, loaded once from a JSON file:
//! - Filtering is an in-memory pipeline scan
//! - Exact language matching by default, "general" wildcard on request
//!
//! ### Relational Catalog Provider
//! Nothing is cached; every call queries a normalized SQLite store:
//! - Option discovery with two DISTINCT queries
//! - Selection by `ORDER BY RANDOM() LIMIT 1`
//! - "general" always matches any requested language
//!
//! ## Example Usage
//!
//! ```ignore
//! use providers::{IdeaProvider, RelationalCatalogProvider, StaticCatalogProvider};
//! use pipeline::{IdeaQuery, LanguageMatch};
//!
//! let provider = StaticCatalogProvider::load(Path::new("projects.json"), LanguageMatch::Exact);
//! provider.ensure_ready()?;
//!
//! let options = provider.list_options(Difficulty::Easy, ProjectType::Cli)?;
//! let idea = provider.select_idea(&IdeaQuery::new().with_difficulty(Difficulty::Easy))?;
//! ```

// Public modules
pub mod error;
pub mod traits;
pub mod static_catalog;
pub mod connection;
pub mod relational;
pub mod schema;

// Re-export commonly used types
pub use error::{ProviderError, Result};
pub use traits::{IdeaProvider, OptionSet};
pub use static_catalog::StaticCatalogProvider;
pub use connection::ConnectionManager;
pub use relational::RelationalCatalogProvider;
pub use schema::{ImportSummary, build_store};
