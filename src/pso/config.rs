//! Particle-swarm engine configuration.

use crate::error::ConfigError;

/// Configuration for the particle-swarm search engine.
///
/// The defaults match the usual discrete-PSO tuning for this problem:
/// inertia 0.8, cognitive and social weights 1.5.
///
/// # Builder Pattern
///
/// ```
/// use slotplan::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_num_particles(100)
///     .with_iterations(300)
///     .with_inertia_weight(0.8)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub num_particles: usize,

    /// Fixed number of iterations to run. There is no early exit.
    pub iterations: usize,

    /// Momentum coefficient: how much of the previous velocity carries over.
    pub inertia_weight: f64,

    /// Pull toward the particle's personal best.
    pub cognitive_weight: f64,

    /// Pull toward the swarm's global best.
    pub social_weight: f64,

    /// When true (the default), one `(r1, r2)` random pair per course is
    /// shared across the classroom and timeslot axes of the velocity
    /// update. When false, each axis draws its own pair. Changing this
    /// alters convergence behavior; the coupled form is the reference
    /// dynamics.
    pub coupled_axis_draws: bool,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            num_particles: 100,
            iterations: 300,
            inertia_weight: 0.8,
            cognitive_weight: 1.5,
            social_weight: 1.5,
            coupled_axis_draws: true,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the swarm size.
    pub fn with_num_particles(mut self, n: usize) -> Self {
        self.num_particles = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the inertia weight.
    pub fn with_inertia_weight(mut self, w: f64) -> Self {
        self.inertia_weight = w;
        self
    }

    /// Sets the cognitive weight.
    pub fn with_cognitive_weight(mut self, w: f64) -> Self {
        self.cognitive_weight = w;
        self
    }

    /// Sets the social weight.
    pub fn with_social_weight(mut self, w: f64) -> Self {
        self.social_weight = w;
        self
    }

    /// Draws an independent `(r1, r2)` pair per velocity axis instead of
    /// sharing one pair across both axes of a course.
    pub fn with_independent_axis_draws(mut self) -> Self {
        self.coupled_axis_draws = false;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_particles == 0 {
            return Err(ConfigError::InvalidConfig(
                "num_particles must be at least 1",
            ));
        }
        if self.iterations == 0 {
            return Err(ConfigError::InvalidConfig("iterations must be at least 1"));
        }
        if !self.inertia_weight.is_finite() || self.inertia_weight < 0.0 {
            return Err(ConfigError::InvalidConfig(
                "inertia_weight must be finite and >= 0",
            ));
        }
        if !self.cognitive_weight.is_finite() || self.cognitive_weight < 0.0 {
            return Err(ConfigError::InvalidConfig(
                "cognitive_weight must be finite and >= 0",
            ));
        }
        if !self.social_weight.is_finite() || self.social_weight < 0.0 {
            return Err(ConfigError::InvalidConfig(
                "social_weight must be finite and >= 0",
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
        let config = PsoConfig::default();
        assert_eq!(config.num_particles, 100);
        assert_eq!(config.iterations, 300);
        assert!((config.inertia_weight - 0.8).abs() < 1e-10);
        assert!((config.cognitive_weight - 1.5).abs() < 1e-10);
        assert!((config.social_weight - 1.5).abs() < 1e-10);
        assert!(config.coupled_axis_draws);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PsoConfig::default()
            .with_num_particles(50)
            .with_iterations(1000)
            .with_inertia_weight(0.6)
            .with_cognitive_weight(2.0)
            .with_social_weight(1.0)
            .with_independent_axis_draws()
            .with_seed(42);

        assert_eq!(config.num_particles, 50);
        assert_eq!(config.iterations, 1000);
        assert!((config.inertia_weight - 0.6).abs() < 1e-10);
        assert!((config.cognitive_weight - 2.0).abs() < 1e-10);
        assert!((config.social_weight - 1.0).abs() < 1e-10);
        assert!(!config.coupled_axis_draws);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_rejects_empty_swarm() {
        let config = PsoConfig::default().with_num_particles(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let config = PsoConfig::default().with_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_weights() {
        assert!(PsoConfig::default()
            .with_inertia_weight(f64::NAN)
            .validate()
            .is_err());
        assert!(PsoConfig::default()
            .with_cognitive_weight(-1.0)
            .validate()
            .is_err());
        assert!(PsoConfig::default()
            .with_social_weight(f64::INFINITY)
            .validate()
            .is_err());
    }
}
