//! Parser and validator for catalog files.
//!
//! A catalog file is a JSON array of records:
//! `{"title", "description", "difficulty", "type", "languages": [..], "tags": [..]}`
//! where `tags` is optional.
//!
//! Parsing happens in two steps:
//! 1. The whole document must be valid JSON and a top-level array,
//!    otherwise the file is rejected.
//! 2. Each element is validated on its own. Invalid elements are rejected
//!    and reported, the rest become `Idea`s.

use crate::error::{CatalogError, Result};
use crate::types::{Difficulty, Idea, ProjectType};
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value;

/// Loosely-typed shape of one record as it appears on disk
#[derive(Debug, Deserialize)]
struct RawRecord {
    title: Option<String>,
    description: Option<String>,
    difficulty: Option<String>,
    #[serde(rename = "type")]
    project_type: Option<String>,
    languages: Option<Vec<String>>,
    tags: Option<Vec<String>>,
}

/// A record that was dropped during validation
#[derive(Debug)]
pub struct RecordRejection {
    /// Position of the record in the source array
    pub index: usize,
    pub error: CatalogError,
}

/// Summary of one catalog load
#[derive(Debug, Default)]
pub struct LoadReport {
    pub accepted: usize,
    pub rejected: Vec<RecordRejection>,
}

/// Parse a catalog document.
///
/// `file` only labels error messages. Returns the accepted ideas in source
/// order along with the rejected records.
pub fn parse_catalog(source: &str, file: &str) -> Result<(Vec<Idea>, LoadReport)> {
    let document: Value = serde_json::from_str(source).map_err(|e| CatalogError::JsonError {
        file: file.to_string(),
        source: e,
    })?;

    let records = match document {
        Value::Array(records) => records,
        other => {
            return Err(CatalogError::NotAnArray {
                file: file.to_string(),
                found: json_kind(&other),
            });
        }
    };

    // Validation is independent per record; rayon keeps the output order.
    let results: Vec<Result<Idea>> = records
        .into_par_iter()
        .enumerate()
        .map(|(index, record)| validate_record(index, record))
        .collect();

    let mut ideas = Vec::with_capacity(results.len());
    let mut report = LoadReport::default();
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(idea) => ideas.push(idea),
            Err(error) => report.rejected.push(RecordRejection { index, error }),
        }
    }
    report.accepted = ideas.len();

    Ok((ideas, report))
}

/// Validate a single record into an `Idea`
pub fn validate_record(index: usize, record: Value) -> Result<Idea> {
    let raw: RawRecord = serde_json::from_value(record).map_err(|e| CatalogError::InvalidRecord {
        index,
        reason: e.to_string(),
    })?;

    let title = required(raw.title, index, "title")?;
    if title.trim().is_empty() {
        return Err(CatalogError::InvalidRecord {
            index,
            reason: "title is blank".to_string(),
        });
    }
    let description = required(raw.description, index, "description")?;

    let difficulty: Difficulty = required(raw.difficulty, index, "difficulty")?
        .parse()
        .map_err(|e: CatalogError| CatalogError::InvalidRecord {
            index,
            reason: e.to_string(),
        })?;

    let project_type: ProjectType = required(raw.project_type, index, "type")?
        .parse()
        .map_err(|e: CatalogError| CatalogError::InvalidRecord {
            index,
            reason: e.to_string(),
        })?;

    let languages = normalize_names(required(raw.languages, index, "languages")?);
    if languages.is_empty() {
        return Err(CatalogError::InvalidRecord {
            index,
            reason: "languages must contain at least one entry".to_string(),
        });
    }

    let tags = normalize_names(raw.tags.unwrap_or_default());

    Ok(Idea {
        title,
        description,
        difficulty,
        project_type,
        languages,
        tags,
    })
}

fn required<T>(value: Option<T>, index: usize, field: &'static str) -> Result<T> {
    value.ok_or(CatalogError::MissingField { index, field })
}

/// Trim names, drop blanks and duplicates, keep first-seen order
fn normalize_names(names: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.trim();
        if !name.is_empty() && !out.iter().any(|n| n == name) {
            out.push(name.to_string());
        }
    }
    out
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
