//! # Interaction Flow
//!
//! This module drives one invocation of the "get project idea" command:
//! 1. Check that the provider started correctly
//! 2. Ask for a difficulty, then a project type
//! 3. Fetch the languages (and tags) available for that pair
//! 4. Ask for a language, then a tag, both optional
//! 5. Ask the provider for one random idea
//! 6. Report the idea, the lack of one, or the failure
//!
//! Each step is awaited before the next starts. Provider calls are blocking
//! (file or SQLite reads) and run on `spawn_blocking`.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use catalog::{Difficulty, Idea, ProjectType};
use pipeline::IdeaQuery;
use providers::{IdeaProvider, ProviderError};

use crate::messages;
use crate::prompt::{Notifier, Prompter};

/// Identifier of the command this flow implements
pub const COMMAND_ID: &str = "astroQuest.getProjectIdea";

/// Failures that end an invocation with an error message
#[derive(Error, Debug)]
pub enum FlowError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The blocking provider task panicked or was cancelled
    #[error("Something went wrong. Check the logs for details.")]
    Internal(#[source] tokio::task::JoinError),
}

/// How an invocation ended
#[derive(Debug)]
pub enum FlowOutcome {
    Suggested(Idea),
    NoMatch,
    /// The user dismissed the difficulty or type prompt
    Cancelled,
    Failed(FlowError),
}

/// Runs the prompt sequence against one provider
#[derive(Clone)]
pub struct IdeaFlow {
    provider: Arc<dyn IdeaProvider>,
    prompter: Arc<dyn Prompter>,
    notifier: Arc<dyn Notifier>,
    preset: IdeaQuery,
}

impl IdeaFlow {
    pub fn new(
        provider: Arc<dyn IdeaProvider>,
        prompter: Arc<dyn Prompter>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            provider,
            prompter,
            notifier,
            preset: IdeaQuery::default(),
        }
    }

    /// Pre-answer prompts: any field set in `preset` is used instead of asking
    pub fn with_preset(mut self, preset: IdeaQuery) -> Self {
        self.preset = preset;
        self
    }

    /// Run the command once and report the result through the notifier.
    ///
    /// Never returns an error: failures are shown to the user and logged.
    pub async fn run(&self) -> FlowOutcome {
        let start = Instant::now();
        info!("Running {} with {}", COMMAND_ID, self.provider.name());

        let outcome = match self.run_steps().await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Error executing {}: {:?}", COMMAND_ID, e);
                FlowOutcome::Failed(e)
            }
        };

        self.report(&outcome);
        info!("{} finished in {:.2?}", COMMAND_ID, start.elapsed());
        outcome
    }

    async fn run_steps(&self) -> Result<FlowOutcome, FlowError> {
        self.call(|provider| provider.ensure_ready()).await?;

        let Some(difficulty) = self.choose_difficulty().await else {
            return Ok(FlowOutcome::Cancelled);
        };
        let Some(project_type) = self.choose_project_type().await else {
            return Ok(FlowOutcome::Cancelled);
        };

        let options = self
            .call(move |provider| provider.list_options(difficulty, project_type))
            .await?;
        debug!(
            "{} languages and {} tags available for {}/{}",
            options.languages.len(),
            options.tags.len(),
            difficulty,
            project_type
        );

        // Difficulty and type given up front: run without asking anything,
        // an unset language or tag means no filter
        let unattended = self.preset.difficulty.is_some() && self.preset.project_type.is_some();

        let language = match &self.preset.language {
            Some(language) => Some(language.clone()),
            None if unattended => None,
            None => self.choose_optional(messages::LANGUAGE_PROMPT, &options.languages).await,
        };

        let tag = match &self.preset.tag {
            Some(tag) => Some(tag.clone()),
            None if unattended => None,
            None if self.provider.supports_tags() => {
                self.choose_optional(messages::TAG_PROMPT, &options.tags).await
            }
            None => None,
        };

        let query = IdeaQuery {
            difficulty: Some(difficulty),
            project_type: Some(project_type),
            language,
            tag,
        };
        info!("Selecting idea for {:?}", query);

        let idea = self.call(move |provider| provider.select_idea(&query)).await?;
        Ok(match idea {
            Some(idea) => FlowOutcome::Suggested(idea),
            None => FlowOutcome::NoMatch,
        })
    }

    async fn choose_difficulty(&self) -> Option<Difficulty> {
        if let Some(difficulty) = self.preset.difficulty {
            return Some(difficulty);
        }
        let options: Vec<String> = Difficulty::ALL.iter().map(|d| d.as_str().to_string()).collect();
        let answer = self.prompter.pick(messages::DIFFICULTY_PROMPT, &options).await?;
        answer
            .parse::<Difficulty>()
            .inspect_err(|e| warn!("Ignoring difficulty answer: {}", e))
            .ok()
    }

    async fn choose_project_type(&self) -> Option<ProjectType> {
        if let Some(project_type) = self.preset.project_type {
            return Some(project_type);
        }
        let options: Vec<String> = ProjectType::ALL.iter().map(|t| t.as_str().to_string()).collect();
        let answer = self.prompter.pick(messages::TYPE_PROMPT, &options).await?;
        answer
            .parse::<ProjectType>()
            .inspect_err(|e| warn!("Ignoring project type answer: {}", e))
            .ok()
    }

    /// Prompt only when there is something to choose; dismissal means "any"
    async fn choose_optional<'a, I>(&self, placeholder: &str, choices: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let options: Vec<String> = choices.into_iter().cloned().collect();
        if options.is_empty() {
            debug!("Skipping prompt '{}': no choices", placeholder);
            return None;
        }
        self.prompter.pick(placeholder, &options).await
    }

    /// Run a blocking provider call off the async runtime
    async fn call<T, F>(&self, op: F) -> Result<T, FlowError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn IdeaProvider) -> providers::Result<T> + Send + 'static,
    {
        let provider = Arc::clone(&self.provider);
        let result = tokio::task::spawn_blocking(move || op(provider.as_ref()))
            .await
            .map_err(FlowError::Internal)?;
        Ok(result?)
    }

    fn report(&self, outcome: &FlowOutcome) {
        match outcome {
            FlowOutcome::Suggested(idea) => self.notifier.info(&messages::suggestion(idea)),
            FlowOutcome::NoMatch => self.notifier.info(messages::NO_MATCH),
            FlowOutcome::Cancelled => debug!("{} cancelled by the user", COMMAND_ID),
            FlowOutcome::Failed(e) => self.notifier.error(&e.to_string()),
        }
    }
}
