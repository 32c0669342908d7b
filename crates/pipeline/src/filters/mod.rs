//! Filter implementations for the idea pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod difficulty;
pub mod language;
pub mod project_type;
pub mod tag;

// Re-export for convenience
pub use difficulty::DifficultyFilter;
pub use language::LanguageFilter;
pub use project_type::ProjectTypeFilter;
pub use tag::TagFilter;
