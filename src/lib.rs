//! Population-based evolutionary optimization.
//!
//! A generic Genetic Algorithm engine plus three genome representations:
//!
//! - **Scalar**: a bounded integer manipulated as a bit string
//!   ([`problems::ScalarSquare`])
//! - **Bit vector**: a fixed-length inclusion vector
//!   ([`problems::Knapsack`])
//! - **Permutation**: a bijection over city indices ([`problems::Tour`])
//!
//! Every run selects parents (roulette wheel or elitist truncation),
//! recombines and mutates offspring with representation-specific operators,
//! keeps the parents unchanged in the next generation, and stops when the
//! generation budget is spent or the population stagnates for `patience`
//! consecutive generations.
//!
//! # Example
//!
//! ```
//! use u_evolve::ga::{GaConfig, GaRunner, Selection};
//! use u_evolve::problems::{format_route, Tour};
//!
//! let tour = Tour::six_cities();
//! let config = GaConfig::new(20, 200, 10, 0.2, 50)
//!     .with_selection(Selection::Truncation)
//!     .with_seed(42);
//!
//! let (route, fitness) = GaRunner::run(&tour, &config).unwrap().into_best();
//! assert_eq!(route.len(), 6);
//! println!("{} ({:.4})", format_route(&route), 1.0 / fitness);
//! ```
//!
//! # Logging
//!
//! The crate emits `tracing` events and never installs a subscriber.
//! [`GaRunner::run`](ga::GaRunner::run) reports every generation at `INFO`
//! through [`ga::TracingProgress`].

pub mod error;
pub mod ga;
pub mod problems;
pub mod random;

pub use error::ConfigError;
