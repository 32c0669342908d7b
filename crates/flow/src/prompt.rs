//! Collaborator boundaries of the interaction flow.
//!
//! The host supplies the single-choice prompt and the message display. The
//! flow only depends on these traits, so a terminal, an editor bridge or a
//! test script can drive it.

use async_trait::async_trait;

/// Shows a single-choice prompt and waits for the answer.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask the user to pick one of `options`.
    ///
    /// Returns `None` when the prompt is dismissed.
    async fn pick(&self, placeholder: &str, options: &[String]) -> Option<String>;
}

/// Displays messages to the user.
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}
