//! Relational catalog provider.
//!
//! Keeps no ideas in memory. Each call reads the SQLite store through the
//! connection manager:
//! - option discovery runs two DISTINCT queries (languages, then tags)
//! - selection narrows to distinct project ids and lets SQLite pick one
//!   with `ORDER BY RANDOM() LIMIT 1`
//!
//! The "general" language is a wildcard here: a project listing it matches
//! any requested language.

use crate::connection::ConnectionManager;
use crate::error::Result;
use crate::traits::{IdeaProvider, OptionSet};
use catalog::{CatalogError, Difficulty, Idea, ProjectType, WILDCARD_LANGUAGE};
use pipeline::IdeaQuery;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params_from_iter};
use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, error, warn};

const LANGUAGES_FOR_PAIR: &str = "
    SELECT DISTINCT l.name
    FROM Projects p
    JOIN Difficulty d ON p.difficulty_id = d.id
    JOIN Types t ON p.type_id = t.id
    JOIN ProjectLanguages pl ON pl.project_id = p.id
    JOIN Languages l ON l.id = pl.language_id
    WHERE d.name = ?1 AND t.name = ?2";

const TAGS_FOR_PAIR: &str = "
    SELECT DISTINCT tg.name
    FROM Projects p
    JOIN Difficulty d ON p.difficulty_id = d.id
    JOIN Types t ON p.type_id = t.id
    JOIN ProjectTags pt ON pt.project_id = p.id
    JOIN Tags tg ON tg.id = pt.tag_id
    WHERE d.name = ?1 AND t.name = ?2";

const LANGUAGES_OF_PROJECT: &str = "
    SELECT l.name
    FROM ProjectLanguages pl
    JOIN Languages l ON l.id = pl.language_id
    WHERE pl.project_id = ?1
    ORDER BY l.name";

const TAGS_OF_PROJECT: &str = "
    SELECT tg.name
    FROM ProjectTags pt
    JOIN Tags tg ON tg.id = pt.tag_id
    WHERE pt.project_id = ?1
    ORDER BY tg.name";

pub struct RelationalCatalogProvider {
    connection: ConnectionManager,
}

impl RelationalCatalogProvider {
    /// Open the store at `path`; a failure leaves the provider unavailable
    pub fn open(path: &Path) -> Self {
        Self::new(ConnectionManager::open(path))
    }

    pub fn new(connection: ConnectionManager) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &ConnectionManager {
        &self.connection
    }

    /// Release the connection; later calls report it as unavailable
    pub fn close(&self) {
        self.connection.close();
    }
}

impl IdeaProvider for RelationalCatalogProvider {
    fn name(&self) -> &str {
        "RelationalCatalogProvider"
    }

    fn ensure_ready(&self) -> Result<()> {
        self.connection.status()
    }

    fn supports_tags(&self) -> bool {
        true
    }

    fn list_options(&self, difficulty: Difficulty, project_type: ProjectType) -> Result<OptionSet> {
        self.connection
            .with_connection(|conn| {
                let params = [difficulty.as_str(), project_type.as_str()];
                let languages = query_names(conn, LANGUAGES_FOR_PAIR, params)?;
                let tags = query_names(conn, TAGS_FOR_PAIR, params)?;
                Ok(OptionSet { languages, tags })
            })
            .inspect_err(|e| error!("Option discovery failed for {}/{}: {}", difficulty, project_type, e))
    }

    fn select_idea(&self, query: &IdeaQuery) -> Result<Option<Idea>> {
        let (sql, params) = build_selection_sql(query);
        debug!("Selecting idea with {} parameters", params.len());

        self.connection
            .with_connection(|conn| {
                let picked = conn
                    .query_row(&sql, params_from_iter(params.iter()), |row| {
                        Ok((
                            row.get::<_, i64>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                            parse_column::<Difficulty>(row, 3)?,
                            parse_column::<ProjectType>(row, 4)?,
                        ))
                    })
                    .optional()?;

                let Some((id, title, description, difficulty, project_type)) = picked else {
                    return Ok(None);
                };

                let languages: Vec<String> = query_names(conn, LANGUAGES_OF_PROJECT, [id])?.into_iter().collect();
                if languages.is_empty() {
                    warn!("Project {} ({}) has no languages", id, title);
                }
                let tags: Vec<String> = query_names(conn, TAGS_OF_PROJECT, [id])?.into_iter().collect();

                Ok(Some(Idea {
                    title,
                    description,
                    difficulty,
                    project_type,
                    languages,
                    tags,
                }))
            })
            .inspect_err(|e| error!("Idea selection failed for {:?}: {}", query, e))
    }
}

/// Build the selection statement for `query`.
///
/// Returns the SQL and its positional parameters. Language and tag
/// associations are left-joined so a project without tags still qualifies
/// when no tag is requested.
pub fn build_selection_sql(query: &IdeaQuery) -> (String, Vec<String>) {
    let mut conditions: Vec<&str> = Vec::new();
    let mut params: Vec<String> = Vec::new();

    if let Some(difficulty) = query.difficulty {
        conditions.push("d.name = ?");
        params.push(difficulty.as_str().to_string());
    }
    if let Some(project_type) = query.project_type {
        conditions.push("t.name = ?");
        params.push(project_type.as_str().to_string());
    }
    if let Some(language) = &query.language {
        conditions.push("(l.name = ? OR l.name = ?)");
        params.push(language.clone());
        params.push(WILDCARD_LANGUAGE.to_string());
    }
    if let Some(tag) = &query.tag {
        conditions.push("tg.name = ?");
        params.push(tag.clone());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    let sql = format!(
        "SELECT p.id, p.title, p.description, d.name, t.name
         FROM Projects p
         JOIN Difficulty d ON p.difficulty_id = d.id
         JOIN Types t ON p.type_id = t.id
         WHERE p.id IN (
             SELECT DISTINCT p.id
             FROM Projects p
             JOIN Difficulty d ON p.difficulty_id = d.id
             JOIN Types t ON p.type_id = t.id
             LEFT JOIN ProjectLanguages pl ON pl.project_id = p.id
             LEFT JOIN Languages l ON l.id = pl.language_id
             LEFT JOIN ProjectTags pt ON pt.project_id = p.id
             LEFT JOIN Tags tg ON tg.id = pt.tag_id
             {where_clause}
         )
         ORDER BY RANDOM()
         LIMIT 1"
    );

    (sql, params)
}

fn query_names<P: rusqlite::Params>(conn: &Connection, sql: &str, params: P) -> rusqlite::Result<BTreeSet<String>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let names = stmt
        .query_map(params, |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<BTreeSet<String>>>()?;
    Ok(names)
}

/// Read a text column and parse it into one of the catalog enums
fn parse_column<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr<Err = CatalogError>,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e: CatalogError| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
