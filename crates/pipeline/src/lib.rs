//! Filtering and random selection of project ideas.
//!
//! This crate provides:
//! - IdeaQuery, the optional filter values picked by the user
//! - Filter trait and implementations for each filter dimension
//! - FilterPipeline for composing filters
//! - Uniform random selection over the surviving candidates
//!
//! ## Architecture
//! A query runs in two stages:
//! 1. Filters narrow the catalog (difficulty, type, language, tag)
//! 2. One of the remaining ideas is picked uniformly at random
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, IdeaQuery, LanguageMatch, select_idea_with};
//!
//! let pipeline = FilterPipeline::standard(LanguageMatch::Exact);
//! let query = IdeaQuery::new()
//!     .with_difficulty(Difficulty::Easy)
//!     .with_type(ProjectType::Cli)
//!     .with_language("python");
//!
//! let idea = select_idea_with(&catalog, &query, &pipeline, &mut rand::rng())?;
//! ```

pub mod traits;
pub mod query;
pub mod filters;
pub mod filter_pipeline;
pub mod select;

// Re-export main types
pub use traits::Filter;
pub use query::{IdeaQuery, LanguageMatch};
pub use filter_pipeline::FilterPipeline;
pub use select::{pick_random, select_idea, select_idea_with};
