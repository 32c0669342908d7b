//! Runtime settings resolved from the command line.
//!
//! Data files default to fixed names next to the executable, so an
//! installed binary finds its bundled catalog regardless of the working
//! directory.

use clap::ValueEnum;
use pipeline::LanguageMatch;
use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG_FILE: &str = "projects.json";
pub const DEFAULT_DATABASE_FILE: &str = "projects.db";

/// Which backing store answers the prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    /// In-memory catalog loaded from the JSON file
    Static,
    /// SQLite store queried on demand
    Relational,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub provider: ProviderKind,
    pub catalog_path: PathBuf,
    pub database_path: PathBuf,
    pub language_match: LanguageMatch,
}

impl Settings {
    pub fn new(
        provider: ProviderKind,
        catalog: Option<&Path>,
        database: Option<&Path>,
        general_wildcard: bool,
    ) -> Self {
        let base = executable_dir();
        Self {
            provider,
            catalog_path: resolve(catalog, base.as_deref(), DEFAULT_CATALOG_FILE),
            database_path: resolve(database, base.as_deref(), DEFAULT_DATABASE_FILE),
            language_match: if general_wildcard {
                LanguageMatch::Wildcard
            } else {
                LanguageMatch::Exact
            },
        }
    }
}

/// An explicit path wins; otherwise `default_name` inside `base`
fn resolve(explicit: Option<&Path>, base: Option<&Path>, default_name: &str) -> PathBuf {
    match (explicit, base) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(dir)) => dir.join(default_name),
        (None, None) => PathBuf::from(default_name),
    }
}

fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
