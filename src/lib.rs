//! Course-to-(classroom, timeslot) assignment search.
//!
//! Places a fixed number of courses onto a discrete `classrooms ×
//! timeslots` grid, avoiding double-booking and maximizing distinct-cell
//! coverage, with two independent population-based metaheuristics:
//!
//! - **Genetic search** ([`ga`]): fitness-proportionate selection,
//!   single-point crossover over disjoint pairs, single-gene mutation;
//!   the population is wholesale-replaced every generation.
//! - **Particle swarm** ([`pso`]): particles carry a schedule position,
//!   a continuous per-course velocity, and a personal best; a shared
//!   global best improves monotonically.
//!
//! Both engines score candidates with the same evaluator
//! ([`GridConfig::fitness`]): 0 when any two courses collide, otherwise
//! the fraction of grid cells covered by distinct assignments. A
//! zero-fitness outcome is a valid terminal result, never an error.
//!
//! # Example
//!
//! ```
//! use slotplan::ga::{GaConfig, GaRunner};
//! use slotplan::pso::{PsoConfig, PsoRunner};
//! use slotplan::report::OccupancyTable;
//! use slotplan::GridConfig;
//!
//! let grid = GridConfig::new(10, 6, 28).unwrap();
//!
//! let ga = GaRunner::run(
//!     &grid,
//!     &GaConfig::default()
//!         .with_population_size(50)
//!         .with_generations(30)
//!         .with_seed(42),
//! )
//! .unwrap();
//!
//! let pso = PsoRunner::run(
//!     &grid,
//!     &PsoConfig::default()
//!         .with_num_particles(30)
//!         .with_iterations(30)
//!         .with_seed(42),
//! )
//! .unwrap();
//!
//! let winner = if ga.best_fitness >= pso.best_fitness { ga.best } else { pso.best };
//! println!("{}", OccupancyTable::from_schedule(&grid, &winner));
//! ```
//!
//! # Determinism
//!
//! Both runners are single-threaded and synchronous; the only source of
//! non-determinism is the RNG, seeded from the config. A fixed seed
//! reproduces a run bit-for-bit.

pub mod error;
pub mod ga;
pub mod model;
pub mod pso;
pub mod report;

pub use error::ConfigError;
pub use model::{generate_initial_population, Assignment, FitnessScore, GridConfig, Schedule};
