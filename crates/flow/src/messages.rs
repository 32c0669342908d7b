//! User-facing text.

use catalog::Idea;

pub const DIFFICULTY_PROMPT: &str = "Select difficulty level";
pub const TYPE_PROMPT: &str = "Select project type";
pub const LANGUAGE_PROMPT: &str = "Select programming language (optional)";
pub const TAG_PROMPT: &str = "Select a tag (optional)";

pub const NO_MATCH: &str = "No projects matched your filters.";

/// The success message for a picked idea
pub fn suggestion(idea: &Idea) -> String {
    format!("💡 {}: {}", idea.title, idea.description)
}
