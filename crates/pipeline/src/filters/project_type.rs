//! Filter on the idea's project type.

use crate::query::IdeaQuery;
use crate::traits::Filter;
use anyhow::Result;
use catalog::Idea;

/// Keeps ideas whose type equals the requested one.
pub struct ProjectTypeFilter;

impl Filter for ProjectTypeFilter {
    fn name(&self) -> &str {
        "ProjectTypeFilter"
    }

    fn apply<'a>(&self, candidates: Vec<&'a Idea>, query: &IdeaQuery) -> Result<Vec<&'a Idea>> {
        let Some(project_type) = query.project_type else {
            return Ok(candidates);
        };
        Ok(candidates
            .into_iter()
            .filter(|idea| idea.project_type == project_type)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::idea;
    use catalog::{Difficulty, ProjectType};

    #[test]
    fn test_project_type_filter() {
        let ideas = vec![
            idea("A", Difficulty::Easy, ProjectType::WebApp, &["js"]),
            idea("B", Difficulty::Easy, ProjectType::MobileApp, &["kotlin"]),
        ];

        let query = IdeaQuery::new().with_type(ProjectType::MobileApp);
        let filtered = ProjectTypeFilter.apply(ideas.iter().collect(), &query).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "B");
    }
}
