//! Random selection over the filtered candidates.

use crate::filter_pipeline::FilterPipeline;
use crate::query::IdeaQuery;
use anyhow::Result;
use catalog::{Catalog, Idea};
use rand::Rng;

/// Pick one candidate uniformly at random.
///
/// Returns `None` for an empty slice.
pub fn pick_random<'a, R: Rng + ?Sized>(candidates: &[&'a Idea], rng: &mut R) -> Option<&'a Idea> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.random_range(0..candidates.len());
    Some(candidates[index])
}

/// Filter the catalog with `pipeline` and pick one match using `rng`.
pub fn select_idea_with<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    query: &IdeaQuery,
    pipeline: &FilterPipeline,
    rng: &mut R,
) -> Result<Option<&'a Idea>> {
    if catalog.is_empty() {
        tracing::debug!("Catalog is empty, nothing to select");
        return Ok(None);
    }

    let matches = pipeline.apply(catalog.ideas().iter().collect(), query)?;
    tracing::debug!("{} ideas match {:?}", matches.len(), query);

    Ok(pick_random(&matches, rng))
}

/// Filter with the standard exact-match pipeline and the thread-local RNG.
pub fn select_idea<'a>(catalog: &'a Catalog, query: &IdeaQuery) -> Result<Option<&'a Idea>> {
    select_idea_with(catalog, query, &FilterPipeline::default(), &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::idea;
    use catalog::{Difficulty, ProjectType};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pick_random_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_random(&[], &mut rng).is_none());
    }

    #[test]
    fn test_pick_random_single() {
        let only = idea("A", Difficulty::Easy, ProjectType::Cli, &["python"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random(&[&only], &mut rng).unwrap().title, "A");
    }

    #[test]
    fn test_select_on_empty_catalog_returns_none() {
        let catalog = Catalog::new();
        let query = IdeaQuery::new().with_difficulty(Difficulty::Easy);
        assert!(select_idea(&catalog, &query).unwrap().is_none());
        assert!(select_idea(&catalog, &IdeaQuery::new()).unwrap().is_none());
    }

    #[test]
    fn test_select_without_filters_can_return_anything() {
        let catalog = Catalog::from_ideas(vec![idea("A", Difficulty::Hard, ProjectType::Api, &["go"])]);
        let picked = select_idea(&catalog, &IdeaQuery::new()).unwrap().unwrap();
        assert_eq!(picked.title, "A");
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let catalog = Catalog::from_ideas(vec![
            idea("A", Difficulty::Easy, ProjectType::Cli, &["python"]),
            idea("B", Difficulty::Easy, ProjectType::Cli, &["python"]),
            idea("C", Difficulty::Easy, ProjectType::Cli, &["python"]),
        ]);
        let pipeline = FilterPipeline::default();
        let query = IdeaQuery::new().with_difficulty(Difficulty::Easy);

        let first: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10)
                .map(|_| select_idea_with(&catalog, &query, &pipeline, &mut rng).unwrap().unwrap().title.clone())
                .collect()
        };
        let second: Vec<String> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10)
                .map(|_| select_idea_with(&catalog, &query, &pipeline, &mut rng).unwrap().unwrap().title.clone())
                .collect()
        };
        assert_eq!(first, second);
    }
}
