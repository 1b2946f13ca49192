//! Genetic engine configuration.

use crate::error::ConfigError;

/// Which schedule the genetic engine reports when it terminates.
///
/// The reference behavior is [`FinalPopulation`](BestTracking::FinalPopulation):
/// the argmax over the last generation only, which can regress from an
/// earlier generation's peak because every generation wholesale-replaces
/// the population. [`BestEver`](BestTracking::BestEver) retains the best
/// schedule observed in any generation instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BestTracking {
    /// Report the best schedule of the final population only.
    #[default]
    FinalPopulation,

    /// Report the best schedule seen across all generations.
    BestEver,
}

/// Configuration for the genetic search engine.
///
/// # Builder Pattern
///
/// ```
/// use slotplan::ga::{BestTracking, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generations(1000)
///     .with_mutation_rate(0.3)
///     .with_best_tracking(BestTracking::BestEver)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of schedules in the population.
    ///
    /// Must be even: crossover consumes the selected set in disjoint
    /// consecutive pairs.
    pub population_size: usize,

    /// Fixed number of generations to run. There is no early exit.
    pub generations: usize,

    /// Probability that a child receives a single random gene
    /// replacement after crossover (0.0–1.0).
    pub mutation_rate: f64,

    /// Result-reporting strategy. See [`BestTracking`].
    pub best_tracking: BestTracking,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.3,
            best_tracking: BestTracking::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the result-reporting strategy.
    pub fn with_best_tracking(mut self, tracking: BestTracking) -> Self {
        self.best_tracking = tracking;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::InvalidConfig(
                "population_size must be at least 2",
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulationSize(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::InvalidConfig("generations must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidConfig(
                "mutation_rate must be within [0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 500);
        assert!((config.mutation_rate - 0.3).abs() < 1e-10);
        assert_eq!(config.best_tracking, BestTracking::FinalPopulation);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(350)
            .with_generations(10_000)
            .with_mutation_rate(0.05)
            .with_best_tracking(BestTracking::BestEver)
            .with_seed(42);

        assert_eq!(config.population_size, 350);
        assert_eq!(config.generations, 10_000);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.best_tracking, BestTracking::BestEver);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_rejects_odd_population() {
        let config = GaConfig::default().with_population_size(99);
        assert_eq!(config.validate(), Err(ConfigError::OddPopulationSize(99)));
    }

    #[test]
    fn test_validate_rejects_tiny_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_generations() {
        let config = GaConfig::default().with_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mutation_rate_clamped() {
        let config = GaConfig::default().with_mutation_rate(1.5);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
        let config = GaConfig::default().with_mutation_rate(-0.5);
        assert!((config.mutation_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_out_of_range_mutation_rate() {
        // Literal construction bypasses the clamping builder.
        let config = GaConfig {
            mutation_rate: 2.0,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
