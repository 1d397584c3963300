//! Optimizer configuration.
//!
//! [`EvolveConfig`] holds every hyperparameter of the evolutionary search.

use crate::error::EvolveError;

/// Configuration for the evolutionary TSP optimizer.
///
/// Validation happens eagerly when the optimizer is constructed; call
/// [`EvolveConfig::validate`] directly to get the error beforehand.
///
/// # Examples
///
/// ```
/// use tsp_evolve::EvolveConfig;
///
/// let config = EvolveConfig::default()
///     .with_max_generations(2_000)
///     .with_population_sizes(64, 128)
///     .with_mutation_probability(15)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Generation budget. The optimizer reports `BudgetExhausted` once the
    /// generation counter exceeds this value.
    pub max_generations: usize,

    /// Number of random tours in the initial population.
    ///
    /// Must be at least 4 so the pairing scheme always forms a pair.
    pub init_population_size: usize,

    /// Upper bound enforced by every sort/cap pass. The population may
    /// exceed it transiently between reproduction and the next cap.
    ///
    /// Must be at least `init_population_size`.
    pub max_population_size: usize,

    /// Generations a tour may survive before being culled.
    pub max_life_time: u32,

    /// Per-tour mutation trigger chance in percent (0–100).
    pub mutation_probability: u8,

    /// Consecutive generations the best route may stay unchanged before
    /// the optimizer reports `Converged`.
    pub stagnation_limit: usize,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            max_generations: 500,
            init_population_size: 100,
            max_population_size: 150,
            max_life_time: 10,
            mutation_probability: 10,
            stagnation_limit: 50,
            seed: None,
        }
    }
}

impl EvolveConfig {
    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the initial and maximum population sizes together.
    pub fn with_population_sizes(mut self, init: usize, max: usize) -> Self {
        self.init_population_size = init;
        self.max_population_size = max;
        self
    }

    /// Sets the maximum tour age.
    pub fn with_max_life_time(mut self, generations: u32) -> Self {
        self.max_life_time = generations;
        self
    }

    /// Sets the mutation chance in percent, clamped to 100.
    pub fn with_mutation_probability(mut self, percent: u8) -> Self {
        self.mutation_probability = percent.min(100);
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, generations: usize) -> Self {
        self.stagnation_limit = generations;
        self
    }

    /// Sets the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), EvolveError> {
        if self.max_generations == 0 {
            return Err(EvolveError::InvalidConfiguration(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.init_population_size == 0 || self.max_population_size == 0 {
            return Err(EvolveError::InvalidConfiguration(
                "population sizes must be positive".into(),
            ));
        }
        if self.max_population_size < self.init_population_size {
            return Err(EvolveError::InvalidConfiguration(
                "max_population_size must be >= init_population_size".into(),
            ));
        }
        if self.mutation_probability > 100 {
            return Err(EvolveError::InvalidConfiguration(
                "mutation_probability must be within 0..=100".into(),
            ));
        }
        if self.init_population_size < 4 {
            return Err(EvolveError::DegeneratePairing(self.init_population_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EvolveConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_generations, 500);
        assert_eq!(config.init_population_size, 100);
        assert_eq!(config.max_population_size, 150);
        assert_eq!(config.max_life_time, 10);
        assert_eq!(config.mutation_probability, 10);
        assert_eq!(config.stagnation_limit, 50);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolveConfig::default()
            .with_max_generations(1000)
            .with_population_sizes(32, 64)
            .with_max_life_time(5)
            .with_mutation_probability(25)
            .with_stagnation_limit(80)
            .with_seed(7);

        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.init_population_size, 32);
        assert_eq!(config.max_population_size, 64);
        assert_eq!(config.max_life_time, 5);
        assert_eq!(config.mutation_probability, 25);
        assert_eq!(config.stagnation_limit, 80);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_mutation_probability_clamps() {
        let config = EvolveConfig::default().with_mutation_probability(250);
        assert_eq!(config.mutation_probability, 100);
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = EvolveConfig::default().with_max_generations(0);
        assert!(matches!(
            config.validate(),
            Err(EvolveError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_zero_population() {
        let config = EvolveConfig::default().with_population_sizes(0, 10);
        assert!(matches!(
            config.validate(),
            Err(EvolveError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_max_below_init() {
        let config = EvolveConfig::default().with_population_sizes(50, 20);
        assert!(matches!(
            config.validate(),
            Err(EvolveError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_degenerate_pairing() {
        let config = EvolveConfig::default().with_population_sizes(3, 10);
        assert_eq!(config.validate(), Err(EvolveError::DegeneratePairing(3)));
    }

    #[test]
    fn test_validate_raw_mutation_probability() {
        // Bypassing the clamping builder still fails validation.
        let config = EvolveConfig {
            mutation_probability: 101,
            ..EvolveConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EvolveError::InvalidConfiguration(_))
        ));
    }
}
