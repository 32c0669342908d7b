//! Filter on the idea's tags.

use crate::query::IdeaQuery;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Idea;

/// Keeps ideas carrying the requested tag (exact match).
pub struct TagFilter;

impl Filter for TagFilter {
    fn name(&self) -> &str {
        "TagFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Idea>, query: &IdeaQuery) -> Result<Vec<&'a Idea>> {
        let Some(tag) = query.tag.as_deref() else {
            return Ok(candidates);
        };
        Ok(candidates.into_iter().filter(|idea| idea.has_tag(tag)).collect())
    }
}
