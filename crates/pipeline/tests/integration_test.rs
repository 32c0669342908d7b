// Integration tests for the selection pipeline
//
// These run the full standard pipeline over a small realistic catalog and
// check the properties every static selection must hold.

use catalog::{Catalog, Difficulty, Idea, ProjectType};
use pipeline::{FilterPipeline, IdeaQuery, LanguageMatch, select_idea_with};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn idea(title: &str, difficulty: Difficulty, project_type: ProjectType, languages: &[&str]) -> Idea {
    Idea {
        title: title.to_string(),
        description: format!("{title} description"),
        difficulty,
        project_type,
        languages: languages.iter().map(|l| l.to_string()).collect(),
        tags: vec![],
    }
}

fn create_test_catalog() -> Catalog {
    Catalog::from_ideas(vec![
        idea("A", Difficulty::Easy, ProjectType::Cli, &["python"]),
        idea("B", Difficulty::Easy, ProjectType::Cli, &["go"]),
        idea("C", Difficulty::Easy, ProjectType::Cli, &["python", "rust"]),
        idea("D", Difficulty::Intermediate, ProjectType::WebApp, &["js", "python"]),
        idea("E", Difficulty::Hard, ProjectType::Api, &["rust"]),
        idea("G", Difficulty::Easy, ProjectType::Cli, &["general"]),
    ])
}

#[test]
fn test_every_pick_satisfies_the_query() {
    let catalog = create_test_catalog();
    let pipeline = FilterPipeline::standard(LanguageMatch::Exact);
    let mut rng = StdRng::seed_from_u64(1);

    let queries = vec![
        IdeaQuery::new().with_difficulty(Difficulty::Easy),
        IdeaQuery::new().with_type(ProjectType::Cli).with_language("python"),
        IdeaQuery::new()
            .with_difficulty(Difficulty::Intermediate)
            .with_type(ProjectType::WebApp)
            .with_language("python"),
        IdeaQuery::new().with_language("rust"),
    ];

    for query in &queries {
        for _ in 0..50 {
            let picked = select_idea_with(&catalog, query, &pipeline, &mut rng)
                .unwrap()
                .expect("every query has at least one match");
            if let Some(d) = query.difficulty {
                assert_eq!(picked.difficulty, d);
            }
            if let Some(t) = query.project_type {
                assert_eq!(picked.project_type, t);
            }
            if let Some(l) = &query.language {
                assert!(picked.has_language(l), "{} does not list {}", picked.title, l);
            }
        }
    }
}

#[test]
fn test_repeated_picks_stay_in_the_candidate_set() {
    let catalog = create_test_catalog();
    let pipeline = FilterPipeline::standard(LanguageMatch::Exact);
    let mut rng = StdRng::seed_from_u64(99);
    let query = IdeaQuery::new()
        .with_difficulty(Difficulty::Easy)
        .with_type(ProjectType::Cli)
        .with_language("python");

    let seen: HashSet<String> = (0..200)
        .map(|_| {
            select_idea_with(&catalog, &query, &pipeline, &mut rng)
                .unwrap()
                .unwrap()
                .title
                .clone()
        })
        .collect();

    let expected: HashSet<String> = ["A", "C"].iter().map(|s| s.to_string()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_python_cli_scenario_returns_only_a() {
    let catalog = Catalog::from_ideas(vec![
        idea("A", Difficulty::Easy, ProjectType::Cli, &["python"]),
        idea("B", Difficulty::Easy, ProjectType::Cli, &["go"]),
    ]);
    let pipeline = FilterPipeline::default();
    let mut rng = StdRng::seed_from_u64(3);
    let query = IdeaQuery::new()
        .with_difficulty(Difficulty::Easy)
        .with_type(ProjectType::Cli)
        .with_language("python");

    for _ in 0..20 {
        let picked = select_idea_with(&catalog, &query, &pipeline, &mut rng).unwrap().unwrap();
        assert_eq!(picked.title, "A");
    }
}

#[test]
fn test_no_match_returns_none() {
    let catalog = create_test_catalog();
    let query = IdeaQuery::new()
        .with_difficulty(Difficulty::Hard)
        .with_type(ProjectType::Ai);

    let picked = select_idea_with(
        &catalog,
        &query,
        &FilterPipeline::default(),
        &mut StdRng::seed_from_u64(0),
    )
    .unwrap();

    assert!(picked.is_none());
}

#[test]
fn test_wildcard_pipeline_admits_general_ideas() {
    let catalog = create_test_catalog();
    let pipeline = FilterPipeline::standard(LanguageMatch::Wildcard);
    let mut rng = StdRng::seed_from_u64(5);
    let query = IdeaQuery::new()
        .with_difficulty(Difficulty::Easy)
        .with_type(ProjectType::Cli)
        .with_language("haskell");

    let picked = select_idea_with(&catalog, &query, &pipeline, &mut rng).unwrap().unwrap();
    assert_eq!(picked.title, "G");
}
