//! Relational catalog schema and importer.
//!
//! The store normalizes each idea into a project row plus lookup tables for
//! difficulty, type, language and tag names. Neither provider writes to it;
//! the importer here is how a store gets built from a JSON catalog.

use catalog::{Catalog, Idea};
use rusqlite::{Connection, Transaction, params};
use std::path::Path;
use tracing::info;

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS Difficulty (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS Types (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS Languages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS Tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS Projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    difficulty_id INTEGER NOT NULL REFERENCES Difficulty(id),
    type_id INTEGER NOT NULL REFERENCES Types(id)
);

CREATE TABLE IF NOT EXISTS ProjectLanguages (
    project_id INTEGER NOT NULL REFERENCES Projects(id),
    language_id INTEGER NOT NULL REFERENCES Languages(id),
    PRIMARY KEY (project_id, language_id)
);

CREATE TABLE IF NOT EXISTS ProjectTags (
    project_id INTEGER NOT NULL REFERENCES Projects(id),
    tag_id INTEGER NOT NULL REFERENCES Tags(id),
    PRIMARY KEY (project_id, tag_id)
);

CREATE INDEX IF NOT EXISTS idx_projects_difficulty_type ON Projects(difficulty_id, type_id);
"#;

/// Lookup tables that map a name to an id
#[derive(Debug, Clone, Copy)]
enum Lookup {
    Difficulty,
    Types,
    Languages,
    Tags,
}

impl Lookup {
    fn table(self) -> &'static str {
        match self {
            Lookup::Difficulty => "Difficulty",
            Lookup::Types => "Types",
            Lookup::Languages => "Languages",
            Lookup::Tags => "Tags",
        }
    }
}

/// Row counts after an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub projects: usize,
    pub languages: usize,
    pub tags: usize,
}

/// Create every table if missing
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}

/// Insert every idea of `catalog` in a single transaction
pub fn import_catalog(conn: &mut Connection, catalog: &Catalog) -> rusqlite::Result<ImportSummary> {
    let tx = conn.transaction()?;
    for idea in catalog.ideas() {
        insert_idea(&tx, idea)?;
    }
    let summary = ImportSummary {
        projects: count(&tx, "Projects")?,
        languages: count(&tx, "Languages")?,
        tags: count(&tx, "Tags")?,
    };
    tx.commit()?;

    info!(
        "Imported catalog: {} projects, {} languages, {} tags",
        summary.projects, summary.languages, summary.tags
    );
    Ok(summary)
}

/// Create (or extend) the store at `path` from `catalog`
pub fn build_store(path: &Path, catalog: &Catalog) -> rusqlite::Result<ImportSummary> {
    let mut conn = Connection::open(path)?;
    create_schema(&conn)?;
    import_catalog(&mut conn, catalog)
}

fn insert_idea(tx: &Transaction<'_>, idea: &Idea) -> rusqlite::Result<i64> {
    let difficulty_id = lookup_id(tx, Lookup::Difficulty, idea.difficulty.as_str())?;
    let type_id = lookup_id(tx, Lookup::Types, idea.project_type.as_str())?;

    tx.execute(
        "INSERT INTO Projects (title, description, difficulty_id, type_id) VALUES (?1, ?2, ?3, ?4)",
        params![idea.title, idea.description, difficulty_id, type_id],
    )?;
    let project_id = tx.last_insert_rowid();

    for language in &idea.languages {
        let language_id = lookup_id(tx, Lookup::Languages, language)?;
        tx.execute(
            "INSERT OR IGNORE INTO ProjectLanguages (project_id, language_id) VALUES (?1, ?2)",
            params![project_id, language_id],
        )?;
    }
    for tag in &idea.tags {
        let tag_id = lookup_id(tx, Lookup::Tags, tag)?;
        tx.execute(
            "INSERT OR IGNORE INTO ProjectTags (project_id, tag_id) VALUES (?1, ?2)",
            params![project_id, tag_id],
        )?;
    }

    Ok(project_id)
}

fn lookup_id(tx: &Transaction<'_>, lookup: Lookup, name: &str) -> rusqlite::Result<i64> {
    let table = lookup.table();
    tx.execute(
        &format!("INSERT OR IGNORE INTO {table} (name) VALUES (?1)"),
        [name],
    )?;
    tx.query_row(
        &format!("SELECT id FROM {table} WHERE name = ?1"),
        [name],
        |row| row.get(0),
    )
}

fn count(tx: &Transaction<'_>, table: &str) -> rusqlite::Result<usize> {
    tx.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get::<_, i64>(0)
    })
    .map(|n| n as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Difficulty, ProjectType};

    fn sample_catalog() -> Catalog {
        Catalog::from_ideas(vec![
            Idea {
                title: "Todo CLI".to_string(),
                description: "Track tasks".to_string(),
                difficulty: Difficulty::Easy,
                project_type: ProjectType::Cli,
                languages: vec!["python".to_string(), "go".to_string()],
                tags: vec!["productivity".to_string()],
            },
            Idea {
                title: "Notes API".to_string(),
                description: "Store notes".to_string(),
                difficulty: Difficulty::Intermediate,
                project_type: ProjectType::Api,
                languages: vec!["go".to_string()],
                tags: vec![],
            },
        ])
    }

    #[test]
    fn test_create_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap();
    }

    #[test]
    fn test_import_normalizes_names() {
        let mut conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();

        let summary = import_catalog(&mut conn, &sample_catalog()).unwrap();

        // "go" is shared by both projects but stored once
        assert_eq!(
            summary,
            ImportSummary {
                projects: 2,
                languages: 2,
                tags: 1
            }
        );
        let links: i64 = conn
            .query_row("SELECT COUNT(*) FROM ProjectLanguages", [], |row| row.get(0))
            .unwrap();
        assert_eq!(links, 3);
    }

    #[test]
    fn test_build_store_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.db");

        let summary = build_store(&path, &sample_catalog()).unwrap();

        assert_eq!(summary.projects, 2);
        assert!(path.exists());
    }
}
