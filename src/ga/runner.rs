//! GA generation loop execution.
//!
//! [`GaRunner`] orchestrates the full cycle:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::{BestTracking, GaConfig};
use super::operators::{mutate_gene, single_point_crossover};
use super::selection::select_population;
use crate::error::ConfigError;
use crate::model::{generate_initial_population, FitnessScore, GridConfig, Schedule};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a genetic search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaResult {
    /// The reported schedule. Which one depends on
    /// [`GaConfig::best_tracking`].
    pub best: Schedule,

    /// Fitness of `best`.
    pub best_fitness: FitnessScore,

    /// Number of generations executed (always the configured budget).
    pub generations: usize,

    /// Best in-population fitness per generation, plus one final entry
    /// for the terminal population (`generations + 1` values). Under
    /// [`BestTracking::FinalPopulation`] this series can regress.
    pub fitness_history: Vec<f64>,
}

/// Executes the genetic search engine.
///
/// # Usage
///
/// ```
/// use slotplan::ga::{GaConfig, GaRunner};
/// use slotplan::GridConfig;
///
/// let grid = GridConfig::new(10, 6, 28).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(20)
///     .with_seed(42);
/// let result = GaRunner::run(&grid, &config).unwrap();
/// assert!(result.best_fitness <= 1.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the genetic search to its fixed generation budget.
    ///
    /// Configuration errors are returned before any loop starts; every
    /// in-loop outcome, including an all-conflict population, produces a
    /// (possibly zero-fitness) result.
    pub fn run(grid: &GridConfig, config: &GaConfig) -> Result<GaResult, ConfigError> {
        grid.validate()?;
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population = generate_initial_population(grid, config.population_size, &mut rng);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        let mut best_ever: Option<(Schedule, FitnessScore)> = None;

        for generation in 0..config.generations {
            let scores: Vec<FitnessScore> =
                population.iter().map(|s| grid.fitness(s)).collect();

            let (gen_best_idx, gen_best_fitness) = argmax(&scores);
            fitness_history.push(gen_best_fitness);
            if best_ever
                .as_ref()
                .is_none_or(|(_, f)| gen_best_fitness > *f)
            {
                best_ever = Some((population[gen_best_idx].clone(), gen_best_fitness));
            }

            log::debug!(
                "generation {generation}: best fitness {gen_best_fitness:.4}, \
                 total {:.4}",
                scores.iter().sum::<f64>()
            );

            let selected = select_population(&population, &scores, &mut rng);

            // Disjoint consecutive pairs; population_size is even.
            let mut next = Vec::with_capacity(config.population_size);
            for pair in selected.chunks_exact(2) {
                let (c1, c2) = single_point_crossover(&pair[0], &pair[1], &mut rng);
                next.push(c1);
                next.push(c2);
            }

            for child in &mut next {
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    mutate_gene(grid, child, &mut rng);
                }
            }

            population = next;
        }

        // The terminal population was produced after the last evaluation.
        let final_scores: Vec<FitnessScore> =
            population.iter().map(|s| grid.fitness(s)).collect();
        let (final_idx, final_fitness) = argmax(&final_scores);
        fitness_history.push(final_fitness);

        let (best, best_fitness) = match config.best_tracking {
            BestTracking::FinalPopulation => (population[final_idx].clone(), final_fitness),
            BestTracking::BestEver => match best_ever {
                Some((schedule, fitness)) if fitness > final_fitness => (schedule, fitness),
                _ => (population[final_idx].clone(), final_fitness),
            },
        };

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.generations,
            fitness_history,
        })
    }
}

/// Index and value of the maximum score. Ties keep the first occurrence.
fn argmax(scores: &[f64]) -> (usize, f64) {
    let mut best_idx = 0;
    for (i, &score) in scores.iter().enumerate() {
        if score > scores[best_idx] {
            best_idx = i;
        }
    }
    (best_idx, scores[best_idx])
}
