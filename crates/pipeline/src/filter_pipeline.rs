//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{DifficultyFilter, LanguageFilter, ProjectTypeFilter, TagFilter};
use crate::query::{IdeaQuery, LanguageMatch};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Idea;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(DifficultyFilter)
///     .add_filter(ProjectTypeFilter)
///     .add_filter(LanguageFilter::new(LanguageMatch::Exact));
///
/// let matches = pipeline.apply(catalog.ideas().iter().collect(), &query)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline the static provider runs for every query:
    /// difficulty, type, language (in the given mode), then tag.
    pub fn standard(language_match: LanguageMatch) -> Self {
        Self::new()
            .add_filter(DifficultyFilter)
            .add_filter(ProjectTypeFilter)
            .add_filter(LanguageFilter::new(language_match))
            .add_filter(TagFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Stops early once nothing is left, since no filter can add ideas back.
    pub fn apply<'a>(&self, candidates: Vec<&'a Idea>, query: &IdeaQuery) -> Result<Vec<&'a Idea>> {
        let mut current = candidates;
        for filter in &self.filters {
            if current.is_empty() {
                break;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, query)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard(LanguageMatch::default())
    }
}
