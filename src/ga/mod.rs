//! Genetic search engine.
//!
//! A generation loop over a population of [`Schedule`](crate::Schedule)s:
//! evaluate → fitness-proportionate selection → single-point crossover →
//! single-gene mutation, repeated for a fixed budget. The population is
//! wholesale-replaced every generation; no individual retains identity.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, mutation rate, seed)
//! - [`GaRunner`]: Executes the generation loop
//! - [`GaResult`]: Final `(Schedule, FitnessScore)` plus statistics
//! - [`BestTracking`]: `best-of-final` (reference behavior) vs `best-ever`
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::{BestTracking, GaConfig};
pub use runner::{GaResult, GaRunner};
pub use selection::select_population;
