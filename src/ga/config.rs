//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! Representation-specific parameters (bounds, items, cities) live on the
//! problem value instead.

use super::convergence::Stagnation;
use super::selection::Selection;
use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// The five run parameters have no defaults and are all passed to
/// [`GaConfig::new`]. Selection, stagnation policy, parallelism, and seed
/// are optional refinements.
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::{GaConfig, Selection, Stagnation};
///
/// let config = GaConfig::new(20, 500, 10, 0.2, 50)
///     .with_selection(Selection::Truncation)
///     .with_stagnation(Stagnation::NoImprovement)
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.offspring_count(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Number of parents selected per generation.
    ///
    /// Parents survive unchanged into the next generation; the remaining
    /// `population_size - num_parents` slots are filled by offspring.
    pub num_parents: usize,

    /// Probability of mutation (0.0–1.0).
    ///
    /// Rolled once per offspring, or once per gene for bit-vector genomes.
    pub mutation_rate: f64,

    /// Consecutive stagnant generations tolerated before stopping.
    pub patience: usize,

    /// Selection strategy for building the mating pool.
    pub selection: Selection,

    /// Stagnation policy. `None` uses the problem's default.
    pub stagnation: Option<Stagnation>,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Evaluation draws no
    /// random numbers, so a seeded run is identical either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// Creates a configuration from the five required run parameters.
    pub fn new(
        population_size: usize,
        max_generations: usize,
        num_parents: usize,
        mutation_rate: f64,
        patience: usize,
    ) -> Self {
        Self {
            population_size,
            max_generations,
            num_parents,
            mutation_rate,
            patience,
            selection: Selection::default(),
            stagnation: None,
            parallel: false,
            seed: None,
        }
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Overrides the problem's default stagnation policy.
    pub fn with_stagnation(mut self, stagnation: Stagnation) -> Self {
        self.stagnation = Some(stagnation);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of offspring produced per generation.
    pub fn offspring_count(&self) -> usize {
        self.population_size.saturating_sub(self.num_parents)
    }

    /// Validates the configuration.
    ///
    /// Returns the first problem found; a run never starts with an
    /// invalid configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.num_parents == 0 {
            return Err(ConfigError::NoParents);
        }
        if self.num_parents > self.population_size {
            return Err(ConfigError::TooManyParents {
                num_parents: self.num_parents,
                population_size: self.population_size,
            });
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if self.patience == 0 {
            return Err(ConfigError::ZeroPatience);
        }
        if let Some(stagnation) = &self.stagnation {
            stagnation.validate()?;
        }
        Ok(())
    }
}
