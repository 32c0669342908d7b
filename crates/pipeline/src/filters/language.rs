//! Filter on the idea's languages.
//!
//! The comparison mode is chosen when the filter is built: exact set
//! membership, or membership where "general" matches anything.

use crate::query::{IdeaQuery, LanguageMatch};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Idea;

/// Keeps ideas that list the requested language.
///
/// ## Algorithm
/// 1. No language requested: keep everything
/// 2. Otherwise keep ideas accepted by `LanguageMatch::matches`
pub struct LanguageFilter {
    mode: LanguageMatch,
}

impl LanguageFilter {
    /// Create a new LanguageFilter.
    ///
    /// # Arguments
    /// * `mode` - Exact membership, or wildcard matching on "general"
    pub fn new(mode: LanguageMatch) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> LanguageMatch {
        self.mode
    }
}

impl Default for LanguageFilter {
    fn default() -> Self {
        Self::new(LanguageMatch::Exact)
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Idea>, query: &IdeaQuery) -> Result<Vec<&'a Idea>> {
        let Some(language) = query.language.as_deref() else {
            return Ok(candidates);
        };
        Ok(candidates
            .into_iter()
            .filter(|idea| self.mode.matches(idea, language))
            .collect())
    }
}
