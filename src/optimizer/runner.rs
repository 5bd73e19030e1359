use super::crossover::order_crossover;
use super::initialization::random_population;
use super::mutation::mutate;
use super::selection::tournament_select;
use crate::config::GaParams;
use crate::error::KgResult;
use crate::layouts::Layout;
use crate::scorer::Scorer;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// A layout together with its cost against the run's corpus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Individual {
    pub layout: Layout,
    pub cost: f64,
}

pub struct OptimizationResult {
    pub layout: Layout,
    pub cost: f64,
    pub generations: usize,
}

/// A trait for receiving updates during optimization.
/// Called with the best individual of the freshly ranked population.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, generation: usize, best: &Individual);
}

impl<F> ProgressCallback for F
where
    F: Fn(usize, &Individual) + Send + Sync,
{
    fn on_progress(&self, generation: usize, best: &Individual) {
        self(generation, best)
    }
}

pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_progress(&self, _generation: usize, _best: &Individual) {}
}

/// Generational GA with elitism, tournament selection, order crossover and
/// swap mutation. Runs for exactly `generations` rounds.
pub struct Optimizer {
    scorer: Arc<Scorer>,
    params: GaParams,
}

impl Optimizer {
    pub fn new(scorer: Arc<Scorer>, params: GaParams) -> KgResult<Self> {
        params.validate()?;
        Ok(Self { scorer, params })
    }

    pub fn params(&self) -> &GaParams {
        &self.params
    }

    /// Costs every layout in parallel. Collecting acts as the generation
    /// barrier: breeding only starts once every cost is known.
    fn evaluate(&self, layouts: Vec<Layout>) -> Vec<Individual> {
        layouts
            .into_par_iter()
            .map(|layout| Individual {
                cost: self.scorer.score(&layout),
                layout,
            })
            .collect()
    }

    fn rank(population: &mut [Individual]) {
        population.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    }

    pub fn run<CB: ProgressCallback>(&self, seed: Option<u64>, callback: CB) -> OptimizationResult {
        let p = &self.params;
        let mut rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };

        let elite_count = p.elite_count();
        debug!(
            "GA start: population {}, generations {}, elite {}, tournament {}",
            p.population_size, p.generations, elite_count, p.tournament_size
        );

        // 1. Seed population
        let mut population = self.evaluate(random_population(&mut rng, p.population_size));

        // 2. Main Loop
        for generation in 0..p.generations {
            Self::rank(&mut population);

            if generation % p.report_interval == 0 {
                callback.on_progress(generation, &population[0]);
            }

            // A. Elites survive untouched
            let mut next: Vec<Individual> = population[..elite_count].to_vec();

            // B. Breed the rest from the ranked population
            let costs: Vec<f64> = population.iter().map(|i| i.cost).collect();
            let mut children = Vec::with_capacity(p.population_size - elite_count);
            while next.len() + children.len() < p.population_size {
                let a = tournament_select(&costs, p.tournament_size, &mut rng);
                let b = tournament_select(&costs, p.tournament_size, &mut rng);
                let child = order_crossover(&population[a].layout, &population[b].layout, &mut rng);
                children.push(mutate(child, p.mutation_rate, &mut rng));
            }

            // C. Replace
            next.extend(self.evaluate(children));
            population = next;
        }

        Self::rank(&mut population);
        let best = population[0].layout;
        let cost = self.scorer.score(&best);
        debug!("GA done: best cost {:.6}", cost);

        OptimizationResult {
            layout: best,
            cost,
            generations: p.generations,
        }
    }
}
