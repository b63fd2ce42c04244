//! Genetic Algorithm framework.
//!
//! A generic GA engine built on a single trait. Each genome representation
//! implements [`GaProblem`], which bundles how to create, evaluate,
//! crossover, and mutate genomes; the runner is monomorphized per problem,
//! so the operator table is fixed once per run.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters (population size, generations, parents,
//!   mutation rate, patience) plus selection and stagnation policy
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best genome, fitness, and run statistics
//! - [`Selection`]: Roulette wheel or elitist truncation
//! - [`Stagnation`]: When a non-improving generation counts toward patience
//! - [`Progress`]: Per-generation reporting side channel
//!
//! # Submodules
//!
//! - [`operators`]: Bitmask, single-point, and order crossover; bit flip and
//!   swap mutation
//!
//! # Generation Step
//!
//! 1. Select `num_parents` parents from the current fitness vector
//! 2. Produce `population_size - num_parents` children by crossover
//! 3. Mutate every child
//! 4. Next population = parents ++ children (parents survive unchanged)
//! 5. Evaluate, update best-ever, update the stagnation counter
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod convergence;
pub mod operators;
mod progress;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use convergence::{Stagnation, StagnationTracker, DEFAULT_FITNESS_TOLERANCE};
pub use progress::{GenerationReport, Progress, TracingProgress};
pub use runner::{GaResult, GaRunner, Termination};
pub use selection::Selection;
pub use types::GaProblem;
