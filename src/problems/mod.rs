//! Concrete genome representations.
//!
//! | Problem | Genome | Crossover | Mutation | Default stagnation |
//! |---------|--------|-----------|----------|--------------------|
//! | [`ScalarSquare`] | `i64` | bitmask | one low-bit flip | identical population |
//! | [`Knapsack`] | `Vec<bool>` | single point | per-gene flip | identical population |
//! | [`Tour`] | `Vec<usize>` | order (OX) | one swap | best fitness within tolerance |

mod knapsack;
mod scalar;
mod tour;

pub use knapsack::Knapsack;
pub use scalar::ScalarSquare;
pub use tour::{format_route, City, Tour, MAX_TOUR_FITNESS};
