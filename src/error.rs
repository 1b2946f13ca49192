//! Configuration error taxonomy.
//!
//! All errors here are fail-fast: they are returned before any search loop
//! starts. In-loop outcomes — an all-conflict population, a zero total
//! fitness generation — are valid results, never errors.

use std::fmt;

/// Errors produced by grid or engine configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A grid dimension (classrooms, timeslots, or courses) is zero.
    InvalidGrid(&'static str),

    /// A search parameter is outside its documented range.
    InvalidConfig(&'static str),

    /// Pairwise crossover requires an even population size.
    OddPopulationSize(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidGrid(field) => {
                write!(f, "invalid grid: {field} must be positive")
            }
            ConfigError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            ConfigError::OddPopulationSize(n) => {
                write!(f, "population_size must be even for pairwise crossover, got {n}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
