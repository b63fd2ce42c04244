//! Configuration errors.
//!
//! Every failure the engine can report is detected before the first
//! generation runs. Once a run starts it always ends in one of the two
//! terminal states (convergence or budget exhaustion).

/// A run configuration or problem definition that cannot be executed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    #[error("num_parents must be at least 1")]
    NoParents,

    #[error("num_parents ({num_parents}) exceeds population_size ({population_size})")]
    TooManyParents {
        num_parents: usize,
        population_size: usize,
    },

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("patience must be at least 1")]
    ZeroPatience,

    #[error("stagnation tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    #[error("invalid scalar bounds [{lo}, {hi}]: require 0 <= lo <= hi")]
    InvalidBounds { lo: i64, hi: i64 },

    #[error("knapsack has no items")]
    NoItems,

    #[error("knapsack has {weights} weights but {values} values")]
    ItemCountMismatch { weights: usize, values: usize },

    #[error("tour has no cities")]
    NoCities,

    #[error("city {index} has non-finite coordinates")]
    NonFiniteCity { index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = ConfigError::TooManyParents {
            num_parents: 12,
            population_size: 10,
        };
        assert_eq!(
            err.to_string(),
            "num_parents (12) exceeds population_size (10)"
        );

        let err = ConfigError::InvalidBounds { lo: 5, hi: 2 };
        assert!(err.to_string().contains("[5, 2]"));
    }
}
