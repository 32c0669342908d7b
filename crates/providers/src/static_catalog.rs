//! Static catalog provider.
//!
//! Holds the whole idea set in memory. The catalog is loaded once when the
//! provider is built; a failed load leaves an empty catalog and a recorded
//! error that `ensure_ready` keeps returning.

use crate::error::{ProviderError, Result};
use crate::traits::{IdeaProvider, OptionSet};
use catalog::{Catalog, Difficulty, Idea, ProjectType};
use pipeline::{FilterPipeline, IdeaQuery, LanguageMatch, select_idea_with};
use std::path::Path;
use tracing::{debug, error};

pub struct StaticCatalogProvider {
    catalog: Catalog,
    pipeline: FilterPipeline,
    load_error: Option<ProviderError>,
}

impl StaticCatalogProvider {
    /// Load the catalog at `path`.
    ///
    /// Never fails: on error the provider starts with an empty catalog and
    /// remembers why.
    pub fn load(path: &Path, language_match: LanguageMatch) -> Self {
        match Catalog::load_from_file(path) {
            Ok(catalog) => Self::from_catalog(catalog, language_match),
            Err(e) => {
                error!("Static catalog unavailable: {}", e);
                Self {
                    catalog: Catalog::new(),
                    pipeline: FilterPipeline::standard(language_match),
                    load_error: Some(e.into()),
                }
            }
        }
    }

    /// Wrap an already loaded catalog
    pub fn from_catalog(catalog: Catalog, language_match: LanguageMatch) -> Self {
        Self {
            catalog,
            pipeline: FilterPipeline::standard(language_match),
            load_error: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The error recorded when loading failed, if any
    pub fn load_error(&self) -> Option<&ProviderError> {
        self.load_error.as_ref()
    }
}

impl IdeaProvider for StaticCatalogProvider {
    fn name(&self) -> &str {
        "StaticCatalogProvider"
    }

    fn ensure_ready(&self) -> Result<()> {
        if let Some(err) = &self.load_error {
            return Err(err.clone());
        }
        if self.catalog.is_empty() {
            return Err(ProviderError::EmptyCatalog);
        }
        Ok(())
    }

    fn supports_tags(&self) -> bool {
        false
    }

    fn list_options(&self, difficulty: Difficulty, project_type: ProjectType) -> Result<OptionSet> {
        Ok(OptionSet {
            languages: self.catalog.languages_for(difficulty, project_type),
            tags: self.catalog.tags_for(difficulty, project_type),
        })
    }

    fn select_idea(&self, query: &IdeaQuery) -> Result<Option<Idea>> {
        let picked = select_idea_with(&self.catalog, query, &self.pipeline, &mut rand::rng())
            .map_err(|e| ProviderError::QueryFailure {
                reason: format!("{e:#}"),
            })?;
        debug!("Static selection for {:?}: {:?}", query, picked.map(|i| &i.title));
        Ok(picked.cloned())
    }
}
