use keyga::config::GaParams;
use keyga::corpus::Corpus;
use keyga::error::KeyGaError;
use keyga::geometry::{distance, Geometry};
use keyga::layouts::{letter_index, Layout};
use keyga::optimizer::{Individual, Optimizer, SilentProgress};
use keyga::scorer::Scorer;
use std::sync::{Arc, Mutex};

fn scorer_for(words: &[&str]) -> Arc<Scorer> {
    Arc::new(Scorer::new(Geometry::standard(), &Corpus::from_words(words)).unwrap())
}

fn ab_corpus() -> Vec<&'static str> {
    ["ab", "ba"].iter().cycle().take(200).copied().collect()
}

fn ab_distance(layout: &Layout, geom: &Geometry) -> f64 {
    let a = letter_index('a').unwrap();
    let b = letter_index('b').unwrap();
    distance(layout.position_of(a, geom), layout.position_of(b, geom))
}

#[test]
fn test_ab_corpus_converges_to_neighbours() {
    let scorer = scorer_for(&ab_corpus());
    let geom = Geometry::standard();
    let stagger = 1.25f64.sqrt();
    let params = GaParams {
        population_size: 20,
        generations: 10,
        ..Default::default()
    };
    let optimizer = Optimizer::new(scorer.clone(), params).unwrap();

    let mut close = 0;
    for seed in 0..10u64 {
        let result = optimizer.run(Some(seed), SilentProgress);
        let d = ab_distance(&result.layout, &geom);

        // The only pair in the corpus is a-b, so cost is exactly their distance
        assert!((result.cost - d).abs() < 1e-12);
        if d <= stagger + 1e-9 {
            close += 1;
        }
    }
    assert!(close >= 7, "only {}/10 runs placed a and b on neighbouring keys", close);
}

#[test]
fn test_long_run_reaches_catalog_minimum() {
    let scorer = scorer_for(&ab_corpus());
    let params = GaParams {
        population_size: 50,
        generations: 100,
        mutation_rate: 0.3,
        ..Default::default()
    };
    let result = Optimizer::new(scorer.clone(), params)
        .unwrap()
        .run(Some(7), SilentProgress);
    let min = Geometry::standard().min_pairwise_distance();
    assert!((result.cost - min).abs() < 1e-9, "cost {} vs min {}", result.cost, min);
}

#[test]
fn test_elitism_keeps_best_cost_monotone() {
    let scorer = scorer_for(&["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog"]);
    let params = GaParams {
        population_size: 30,
        generations: 60,
        report_interval: 1,
        ..Default::default()
    };
    let history = Mutex::new(Vec::new());
    let result = Optimizer::new(scorer, params).unwrap().run(
        Some(123),
        |generation: usize, best: &Individual| {
            history.lock().unwrap().push((generation, best.cost));
        },
    );

    let history = history.into_inner().unwrap();
    assert_eq!(history.len(), 60);
    assert_eq!(history[0].0, 0);
    for w in history.windows(2) {
        assert!(
            w[1].1 <= w[0].1,
            "best cost rose from {} to {} at generation {}",
            w[0].1,
            w[1].1,
            w[1].0
        );
    }
    assert!(result.cost <= history.last().unwrap().1);
}

#[test]
fn test_progress_reported_on_interval() {
    let scorer = scorer_for(&["hello", "world"]);
    let params = GaParams {
        population_size: 10,
        generations: 120,
        ..Default::default()
    };
    let seen = Mutex::new(Vec::new());
    Optimizer::new(scorer, params)
        .unwrap()
        .run(Some(1), |generation: usize, _best: &Individual| {
            seen.lock().unwrap().push(generation);
        });
    assert_eq!(seen.into_inner().unwrap(), vec![0, 50, 100]);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let scorer = scorer_for(&["keyboard", "layout", "genetic", "search"]);
    let params = GaParams {
        population_size: 25,
        generations: 30,
        ..Default::default()
    };
    let optimizer = Optimizer::new(scorer, params).unwrap();
    let a = optimizer.run(Some(99), SilentProgress);
    let b = optimizer.run(Some(99), SilentProgress);
    assert_eq!(a.layout, b.layout);
    assert_eq!(a.cost, b.cost);
}

#[test]
fn test_empty_corpus_runs_to_completion() {
    let scorer = scorer_for(&[]);
    let params = GaParams {
        population_size: 10,
        generations: 5,
        ..Default::default()
    };
    let result = Optimizer::new(scorer, params)
        .unwrap()
        .run(Some(3), SilentProgress);
    assert_eq!(result.cost, 0.0);
    assert_eq!(result.generations, 5);
}

#[test]
fn test_zero_elites_is_legal() {
    let scorer = scorer_for(&["abc"]);
    let params = GaParams {
        population_size: 4,
        generations: 5,
        elitism: 0.2,
        tournament_size: 2,
        ..Default::default()
    };
    assert_eq!(params.elite_count(), 0);
    let result = Optimizer::new(scorer, params)
        .unwrap()
        .run(Some(3), SilentProgress);
    assert!(result.cost > 0.0);
}

#[test]
fn test_oversized_tournament_fails_fast() {
    let params = GaParams {
        population_size: 2,
        tournament_size: 3,
        ..Default::default()
    };
    let err = Optimizer::new(scorer_for(&["ab"]), params).err().unwrap();
    assert!(matches!(err, KeyGaError::Config(_)));
}

#[test]
fn test_zero_generations_returns_best_seed() {
    let scorer = scorer_for(&["ab"]);
    let params = GaParams {
        population_size: 5,
        generations: 0,
        tournament_size: 2,
        ..Default::default()
    };
    let result = Optimizer::new(scorer.clone(), params)
        .unwrap()
        .run(Some(8), SilentProgress);
    assert_eq!(result.cost, scorer.score(&result.layout));
}
