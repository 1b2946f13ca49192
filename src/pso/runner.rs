//! PSO iteration loop execution.
//!
//! [`PsoRunner`] orchestrates the full cycle: evaluate all particles →
//! update personal/global bests → update velocities → update positions,
//! repeated for a fixed budget. The global best never regresses.

use super::config::PsoConfig;
use super::particle::Particle;
use crate::error::ConfigError;
use crate::model::{FitnessScore, GridConfig, Schedule};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Result of a particle-swarm search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PsoResult {
    /// The swarm's global-best schedule.
    pub best: Schedule,

    /// Fitness of `best`.
    pub best_fitness: FitnessScore,

    /// Number of iterations executed (always the configured budget).
    pub iterations: usize,

    /// Global-best fitness after each iteration. Non-decreasing by
    /// construction.
    pub fitness_history: Vec<f64>,
}

/// Executes the particle-swarm search engine.
///
/// # Usage
///
/// ```
/// use slotplan::pso::{PsoConfig, PsoRunner};
/// use slotplan::GridConfig;
///
/// let grid = GridConfig::new(10, 6, 28).unwrap();
/// let config = PsoConfig::default()
///     .with_num_particles(30)
///     .with_iterations(50)
///     .with_seed(42);
/// let result = PsoRunner::run(&grid, &config).unwrap();
/// assert!(result.best_fitness <= 1.0);
/// ```
pub struct PsoRunner;

impl PsoRunner {
    /// Runs the swarm to its fixed iteration budget.
    ///
    /// Configuration errors are returned before any loop starts; a
    /// zero-fitness global best is a valid terminal result.
    pub fn run(grid: &GridConfig, config: &PsoConfig) -> Result<PsoResult, ConfigError> {
        grid.validate()?;
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut particles: Vec<Particle> = (0..config.num_particles)
            .map(|_| Particle::new(grid, &mut rng))
            .collect();
        // The first particle's starting position seeds the global best.
        let mut global_best = particles[0].position.clone();

        let mut fitness_history = Vec::with_capacity(config.iterations);

        for iteration in 0..config.iterations {
            for particle in &mut particles {
                particle.fitness = grid.fitness(&particle.position);
                if particle.fitness > grid.fitness(&particle.best) {
                    particle.best = particle.position.clone();
                }
                if particle.fitness > grid.fitness(&global_best) {
                    global_best = particle.position.clone();
                }
            }

            for particle in &mut particles {
                particle.update_velocity(&global_best, config, &mut rng);
                particle.update_position(grid);
            }

            let gbest_fitness = grid.fitness(&global_best);
            fitness_history.push(gbest_fitness);
            log::debug!("iteration {iteration}: global best fitness {gbest_fitness:.4}");
        }

        let best_fitness = grid.fitness(&global_best);
        Ok(PsoResult {
            best: global_best,
            best_fitness,
            iterations: config.iterations,
            fitness_history,
        })
    }
}
