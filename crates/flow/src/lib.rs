//! Interaction flow for the "get project idea" command.
//!
//! This crate contains the orchestrator that walks the user through the
//! difficulty, type, language and tag prompts and reports one idea. The
//! prompt UI and message display are supplied by the caller through the
//! `Prompter` and `Notifier` traits.

pub mod messages;
pub mod orchestrator;
pub mod prompt;

pub use orchestrator::{COMMAND_ID, FlowError, FlowOutcome, IdeaFlow};
pub use prompt::{Notifier, Prompter};
