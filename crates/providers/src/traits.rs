//! The contract both idea providers satisfy.

use crate::error::Result;
use catalog::{Difficulty, Idea, ProjectType};
use pipeline::IdeaQuery;
use std::collections::BTreeSet;

/// Choices available for the later prompts, given a difficulty and type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    pub languages: BTreeSet<String>,
    pub tags: BTreeSet<String>,
}

/// A backing store that can answer the interaction flow's questions.
///
/// Methods are blocking; async callers run them on a blocking thread.
pub trait IdeaProvider: Send + Sync {
    /// Returns the name of this provider (for logging)
    fn name(&self) -> &str;

    /// Check whether startup succeeded.
    ///
    /// Returns the startup failure (missing file, dead connection, ...) so
    /// the caller can report it before prompting.
    fn ensure_ready(&self) -> Result<()>;

    /// Whether the flow should offer a tag prompt
    fn supports_tags(&self) -> bool;

    /// Distinct languages and tags of ideas with this difficulty and type.
    ///
    /// No matching ideas yields two empty sets, not an error.
    fn list_options(&self, difficulty: Difficulty, project_type: ProjectType) -> Result<OptionSet>;

    /// One randomly chosen idea matching `query`, or `None` if nothing matches
    fn select_idea(&self, query: &IdeaQuery) -> Result<Option<Idea>>;
}
