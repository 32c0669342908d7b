//! Building the SQLite store from the JSON catalog.

use anyhow::{Context, Result, bail};
use catalog::Catalog;
use providers::ImportSummary;
use std::path::Path;
use tracing::info;

/// Build the store at `target` from the catalog at `catalog_path`.
///
/// The catalog is loaded first and the new store is written to a temporary
/// file beside `target`. It only replaces `target` once complete, so a
/// failed import leaves an existing store as it was.
pub fn import_store(catalog_path: &Path, target: &Path, force: bool) -> Result<ImportSummary> {
    if target.exists() && !force {
        bail!("{} already exists; pass --force to rebuild it", target.display());
    }

    let catalog = Catalog::load_from_file(catalog_path)
        .with_context(|| format!("Failed to load the JSON catalog {}", catalog_path.display()))?;
    if catalog.is_empty() {
        bail!("{} holds no ideas; refusing to build an empty store", catalog_path.display());
    }

    let dir = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let staging = tempfile::Builder::new()
        .prefix(".projects-")
        .suffix(".db")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to create a temporary store in {}", dir.display()))?;

    let summary = providers::build_store(staging.path(), &catalog)
        .with_context(|| format!("Failed to build {}", target.display()))?;

    staging
        .persist(target)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to move the new store to {}", target.display()))?;
    info!("Store at {} built from {}", target.display(), catalog_path.display());

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Difficulty, ProjectType};
    use pipeline::IdeaQuery;
    use providers::{IdeaProvider, RelationalCatalogProvider};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const CATALOG: &str = r#"[
        {"title": "Todo CLI", "description": "Track tasks", "difficulty": "easy",
         "type": "CLI", "languages": ["python", "go"], "tags": ["productivity"]},
        {"title": "Notes API", "description": "Store notes", "difficulty": "intermediate",
         "type": "API", "languages": ["go"]}
    ]"#;

    fn workspace(catalog: Option<&str>) -> (TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("projects.json");
        if let Some(contents) = catalog {
            fs::write(&catalog_path, contents).unwrap();
        }
        let target = dir.path().join("projects.db");
        (dir, catalog_path, target)
    }

    fn entries(dir: &TempDir) -> usize {
        fs::read_dir(dir.path()).unwrap().count()
    }

    #[test]
    fn test_fresh_import_builds_a_queryable_store() {
        let (_dir, catalog_path, target) = workspace(Some(CATALOG));

        let summary = import_store(&catalog_path, &target, false).unwrap();
        assert_eq!(summary.projects, 2);

        let provider = RelationalCatalogProvider::open(&target);
        assert!(provider.ensure_ready().is_ok());
        let query = IdeaQuery::new()
            .with_difficulty(Difficulty::Easy)
            .with_type(ProjectType::Cli);
        assert_eq!(provider.select_idea(&query).unwrap().unwrap().title, "Todo CLI");
    }

    #[test]
    fn test_existing_store_needs_force() {
        let (_dir, catalog_path, target) = workspace(Some(CATALOG));
        fs::write(&target, "existing store").unwrap();

        let err = import_store(&catalog_path, &target, false).unwrap_err();

        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "existing store");
    }

    #[test]
    fn test_missing_catalog_keeps_existing_store() {
        let (dir, catalog_path, target) = workspace(None);
        fs::write(&target, "existing store").unwrap();

        assert!(import_store(&catalog_path, &target, true).is_err());

        assert_eq!(fs::read_to_string(&target).unwrap(), "existing store");
        assert_eq!(entries(&dir), 1);
    }

    #[test]
    fn test_malformed_catalog_keeps_existing_store() {
        let (dir, catalog_path, target) = workspace(Some("{\"not\": \"an array\"}"));
        fs::write(&target, "existing store").unwrap();

        assert!(import_store(&catalog_path, &target, true).is_err());

        assert_eq!(fs::read_to_string(&target).unwrap(), "existing store");
        // No temporary store left behind
        assert_eq!(entries(&dir), 2);
    }

    #[test]
    fn test_empty_catalog_is_refused() {
        let (_dir, catalog_path, target) = workspace(Some("[]"));
        assert!(import_store(&catalog_path, &target, false).is_err());
        assert!(!target.exists());
    }

    #[test]
    fn test_force_replaces_existing_store() {
        let (dir, catalog_path, target) = workspace(Some(CATALOG));
        import_store(&catalog_path, &target, false).unwrap();

        // Rebuilding does not append to the old store
        let summary = import_store(&catalog_path, &target, true).unwrap();

        assert_eq!(summary.projects, 2);
        assert_eq!(entries(&dir), 2);
        assert!(RelationalCatalogProvider::open(&target).ensure_ready().is_ok());
    }
}
