//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a candidate list of ideas.

use crate::query::IdeaQuery;
use anyhow::Result;
use catalog::Idea;

/// Core trait for filtering candidate ideas.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets a provider share one pipeline across blocking tasks
/// - Candidates are borrowed from the catalog, so filtering never clones an Idea
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership of the list)
    /// * `query` - The user's filter values
    ///
    /// # Returns
    /// * `Ok(Vec<&Idea>)` - The filtered candidates, in input order
    /// * `Err` - If filtering fails
    fn apply<'a>(&self, candidates: Vec<&'a Idea>, query: &IdeaQuery) -> Result<Vec<&'a Idea>>;
}
