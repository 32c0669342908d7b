mod config;
mod import;
mod terminal;

use anyhow::{Context, Result};
use catalog::{Catalog, Difficulty, ProjectType};
use clap::{Parser, Subcommand};
use colored::Colorize;
use config::{ProviderKind, Settings};
use flow::{FlowOutcome, IdeaFlow};
use pipeline::IdeaQuery;
use providers::{IdeaProvider, RelationalCatalogProvider, StaticCatalogProvider};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use terminal::{TerminalNotifier, TerminalPrompter};

/// AstroQuest - random project ideas for your next build
#[derive(Parser)]
#[command(name = "astroquest")]
#[command(about = "Suggests a random project idea filtered by difficulty, type, language and tag", long_about = None)]
struct Cli {
    /// Backing store to query
    #[arg(short, long, value_enum, default_value = "static")]
    provider: ProviderKind,

    /// Path to the JSON idea catalog (defaults to projects.json next to the binary)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Path to the SQLite idea store (defaults to projects.db next to the binary)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Let ideas listing "general" match any language (static provider)
    #[arg(long)]
    general_wildcard: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a random project idea, prompting for anything not given
    Idea {
        /// Difficulty: easy, intermediate or hard
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Project type: CLI, "web app", "mobile app", AI, API or "desktop app"
        #[arg(long = "type")]
        project_type: Option<ProjectType>,

        /// Programming language
        #[arg(long)]
        language: Option<String>,

        /// Tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// List the languages and tags available for a difficulty and type
    Options {
        #[arg(long)]
        difficulty: Difficulty,

        #[arg(long = "type")]
        project_type: ProjectType,
    },

    /// Build the SQLite store from the JSON catalog
    Import {
        /// Replace an existing store instead of refusing
        #[arg(long)]
        force: bool,
    },

    /// Show how many ideas the JSON catalog holds per difficulty and type
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the prompts
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::new(
        cli.provider,
        cli.catalog.as_deref(),
        cli.database.as_deref(),
        cli.general_wildcard,
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Idea {
            difficulty,
            project_type,
            language,
            tag,
        } => {
            let preset = IdeaQuery {
                difficulty,
                project_type,
                language,
                tag,
            };
            handle_idea(&settings, preset).await;
        }
        Commands::Options {
            difficulty,
            project_type,
        } => handle_options(&settings, difficulty, project_type)?,
        Commands::Import { force } => handle_import(&settings, force)?,
        Commands::Stats => handle_stats(&settings)?,
    }

    Ok(())
}

/// Open the configured provider. Startup failures are kept inside the
/// provider and surface on first use.
fn build_provider(settings: &Settings) -> Arc<dyn IdeaProvider> {
    match settings.provider {
        ProviderKind::Static => Arc::new(StaticCatalogProvider::load(
            &settings.catalog_path,
            settings.language_match,
        )),
        ProviderKind::Relational => Arc::new(RelationalCatalogProvider::open(&settings.database_path)),
    }
}

/// Handle the 'idea' command
async fn handle_idea(settings: &Settings, preset: IdeaQuery) {
    let provider = build_provider(settings);
    let flow = IdeaFlow::new(
        provider,
        Arc::new(TerminalPrompter::new()),
        Arc::new(TerminalNotifier),
    )
    .with_preset(preset);

    if let FlowOutcome::Suggested(idea) = flow.run().await {
        let languages = idea.languages.join(", ");
        println!(
            "   {} {} | {} | {}",
            "•".green(),
            idea.difficulty,
            idea.project_type,
            languages
        );
        if !idea.tags.is_empty() {
            println!("   {} tags: {}", "•".green(), idea.tags.join(", "));
        }
    }
}

/// Handle the 'options' command
fn handle_options(settings: &Settings, difficulty: Difficulty, project_type: ProjectType) -> Result<()> {
    let provider = build_provider(settings);
    provider.ensure_ready()?;

    let options = provider
        .list_options(difficulty, project_type)
        .with_context(|| format!("Failed to list options for {difficulty}/{project_type}"))?;

    println!("{}", format!("Options for {difficulty} {project_type} projects:").bold().blue());
    if options.languages.is_empty() && options.tags.is_empty() {
        println!("  (no matching projects)");
        return Ok(());
    }
    println!("{}Languages:", "• ".green());
    for language in &options.languages {
        println!("  - {}", language);
    }
    if !options.tags.is_empty() {
        println!("{}Tags:", "• ".cyan());
        for tag in &options.tags {
            println!("  - {}", tag);
        }
    }
    Ok(())
}

/// Handle the 'import' command
fn handle_import(settings: &Settings, force: bool) -> Result<()> {
    let target = &settings.database_path;
    println!("Loading catalog from {}...", settings.catalog_path.display());
    let start = Instant::now();

    let summary = import::import_store(&settings.catalog_path, target, force)?;

    println!(
        "{} Imported {} projects ({} languages, {} tags) into {} in {:?}",
        "✓".green(),
        summary.projects,
        summary.languages,
        summary.tags,
        target.display(),
        start.elapsed()
    );
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(settings: &Settings) -> Result<()> {
    let (catalog, report) = Catalog::load_with_report(&settings.catalog_path)
        .context("Failed to load the JSON catalog")?;

    println!(
        "{}",
        format!("Catalog {}:", settings.catalog_path.display()).bold().blue()
    );
    println!("{}Ideas: {}", "• ".green(), catalog.len());
    println!("{}Rejected records: {}", "• ".green(), report.rejected.len());
    for rejection in &report.rejected {
        println!("    #{}: {}", rejection.index, rejection.error);
    }

    println!("{}", "Ideas per difficulty and type:".bold());
    for ((difficulty, project_type), count) in catalog.breakdown() {
        println!("  - {:<13} {:<12} {}", difficulty.to_string(), project_type.to_string(), count);
    }
    Ok(())
}
