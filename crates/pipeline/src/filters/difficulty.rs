//! Filter on the idea's difficulty.

use crate::query::IdeaQuery;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Idea;

/// Keeps ideas whose difficulty equals the requested one.
///
/// Passes everything through when no difficulty was requested.
pub struct DifficultyFilter;

impl Filter for DifficultyFilter {
    fn name(&self) -> &str {
        "DifficultyFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Idea>, query: &IdeaQuery) -> Result<Vec<&'a Idea>> {
        let Some(difficulty) = query.difficulty else {
            return Ok(candidates);
        };
        Ok(candidates
            .into_iter()
            .filter(|idea| idea.difficulty == difficulty)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::idea;
    use catalog::{Difficulty, ProjectType};

    #[test]
    fn test_difficulty_filter() {
        let ideas = vec![
            idea("A", Difficulty::Easy, ProjectType::Cli, &["python"]),
            idea("B", Difficulty::Hard, ProjectType::Cli, &["python"]),
            idea("C", Difficulty::Easy, ProjectType::Ai, &["go"]),
        ];
        let candidates: Vec<&Idea> = ideas.iter().collect();

        let query = IdeaQuery::new().with_difficulty(Difficulty::Easy);
        let filtered = DifficultyFilter.apply(candidates, &query).unwrap();

        let titles: Vec<&str> = filtered.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_absent_difficulty_keeps_all() {
        let ideas = vec![
            idea("A", Difficulty::Easy, ProjectType::Cli, &["python"]),
            idea("B", Difficulty::Hard, ProjectType::Cli, &["python"]),
        ];
        let filtered = DifficultyFilter
            .apply(ideas.iter().collect(), &IdeaQuery::new())
            .unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
