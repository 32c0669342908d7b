//! Filter criteria shared by every provider.

use catalog::{Difficulty, Idea, ProjectType, WILDCARD_LANGUAGE};

/// The values a user picked, any of which may be absent.
///
/// An absent field means "do not filter on this".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaQuery {
    pub difficulty: Option<Difficulty>,
    pub project_type: Option<ProjectType>,
    pub language: Option<String>,
    pub tag: Option<String>,
}

impl IdeaQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_type(mut self, project_type: ProjectType) -> Self {
        self.project_type = Some(project_type);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// How a requested language is compared against an idea's languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LanguageMatch {
    /// The idea must list the requested language
    #[default]
    Exact,
    /// Ideas listing "general" also match any requested language
    Wildcard,
}

impl LanguageMatch {
    pub fn matches(&self, idea: &Idea, language: &str) -> bool {
        match self {
            LanguageMatch::Exact => idea.has_language(language),
            LanguageMatch::Wildcard => idea.has_language(language) || idea.has_language(WILDCARD_LANGUAGE),
        }
    }
}
