//! Core domain types for the idea catalog.
//!
//! This module defines the data structures shared by both providers:
//! - Closed enums for the fixed difficulty and project type sets
//! - The validated `Idea` record
//! - `Catalog`, the read-only in-memory collection of ideas

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Language value that matches any requested language filter.
pub const WILDCARD_LANGUAGE: &str = "general";

// =============================================================================
// Difficulty
// =============================================================================

/// How hard a project idea is to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Intermediate,
    Hard,
}

impl Difficulty {
    /// All difficulties in prompt order
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Intermediate, Difficulty::Hard];

    /// The name used in catalog files and the relational store
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "difficulty".to_string(),
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Project type
// =============================================================================

/// What kind of program the idea describes.
///
/// The wire names are mixed case ("CLI", "web app"), so each variant is
/// renamed explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "CLI")]
    Cli,
    #[serde(rename = "web app")]
    WebApp,
    #[serde(rename = "mobile app")]
    MobileApp,
    #[serde(rename = "AI")]
    Ai,
    #[serde(rename = "API")]
    Api,
    #[serde(rename = "desktop app")]
    DesktopApp,
}

impl ProjectType {
    /// All project types in prompt order
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Cli,
        ProjectType::WebApp,
        ProjectType::MobileApp,
        ProjectType::Ai,
        ProjectType::Api,
        ProjectType::DesktopApp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Cli => "CLI",
            ProjectType::WebApp => "web app",
            ProjectType::MobileApp => "mobile app",
            ProjectType::Ai => "AI",
            ProjectType::Api => "API",
            ProjectType::DesktopApp => "desktop app",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CatalogError::InvalidValue {
                field: "type".to_string(),
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Idea
// =============================================================================

/// A single project suggestion.
///
/// Ideas only come out of the validator in `parser` or out of the relational
/// store, so `languages` is never empty and contains no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Idea {
    /// Exact membership test, no wildcard
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// True if the idea is tagged with the wildcard language
    pub fn is_general(&self) -> bool {
        self.has_language(WILDCARD_LANGUAGE)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// =============================================================================
// Catalog - the in-memory idea store
// =============================================================================

/// The full idea set held by the static provider.
///
/// Built once from a file and never mutated afterwards; callers share it
/// behind an `Arc` and only ever borrow from it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) ideas: Vec<Idea>,
}

impl Catalog {
    /// Creates an empty catalog (the state after a failed load)
    pub fn new() -> Self {
        Self { ideas: Vec::new() }
    }

    /// Wraps an already validated sequence of ideas, keeping its order
    pub fn from_ideas(ideas: Vec<Idea>) -> Self {
        Self { ideas }
    }

    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Ideas with exactly this difficulty and type
    pub fn matching(
        &self,
        difficulty: Difficulty,
        project_type: ProjectType,
    ) -> impl Iterator<Item = &Idea> {
        self.ideas
            .iter()
            .filter(move |idea| idea.difficulty == difficulty && idea.project_type == project_type)
    }

    /// Distinct languages among ideas with this difficulty and type
    pub fn languages_for(&self, difficulty: Difficulty, project_type: ProjectType) -> BTreeSet<String> {
        self.matching(difficulty, project_type)
            .flat_map(|idea| idea.languages.iter().cloned())
            .collect()
    }

    /// Distinct tags among ideas with this difficulty and type
    pub fn tags_for(&self, difficulty: Difficulty, project_type: ProjectType) -> BTreeSet<String> {
        self.matching(difficulty, project_type)
            .flat_map(|idea| idea.tags.iter().cloned())
            .collect()
    }

    /// Number of ideas per (difficulty, type) pair, for the `stats` report
    pub fn breakdown(&self) -> BTreeMap<(Difficulty, ProjectType), usize> {
        let mut counts = BTreeMap::new();
        for idea in &self.ideas {
            *counts.entry((idea.difficulty, idea.project_type)).or_insert(0) += 1;
        }
        counts
    }
}
