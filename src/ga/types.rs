//! Core trait definitions for the GA framework.
//!
//! [`GaProblem`] is the contract between the generic evolutionary loop and a
//! genome representation. One implementation bundles the whole operator
//! table for a representation (initialization, fitness, crossover,
//! mutation), so the runner picks it once per run and dispatches statically.

use super::convergence::Stagnation;
use crate::error::ConfigError;
use rand::Rng;
use std::fmt::Debug;

/// Defines a GA optimization problem over one genome representation.
///
/// Fitness is **maximized**: higher values are better, and fitness must be
/// non-negative and finite so that fitness-proportional selection is well
/// defined.
///
/// # Implementing
///
/// ```ignore
/// struct OneMax { len: usize }
///
/// impl GaProblem for OneMax {
///     type Genome = Vec<bool>;
///
///     fn create_genome<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<bool> {
///         (0..self.len).map(|_| rng.random_bool(0.5)).collect()
///     }
///     fn evaluate(&self, genome: &Vec<bool>) -> f64 {
///         genome.iter().filter(|&&b| b).count() as f64
///     }
///     fn crossover<R: Rng + ?Sized>(&self, a: &Vec<bool>, b: &Vec<bool>, rng: &mut R) -> Vec<bool> {
///         let k = rng.random_range(0..self.len);
///         operators::single_point_crossover(a, b, k)
///     }
///     fn mutate<R: Rng + ?Sized>(&self, genome: &mut Vec<bool>, rate: f64, rng: &mut R) {
///         operators::flip_bits(genome, rate, rng);
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate a
/// population in parallel (feature `parallel`).
pub trait GaProblem: Send + Sync {
    /// The genome (solution encoding) for this problem.
    ///
    /// `Ord` is required by the identical-population stagnation check,
    /// which compares sorted genome multisets.
    type Genome: Clone + Ord + Debug + Send + Sync;

    /// Checks the problem definition before a run starts.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Creates a random, valid genome for the initial population.
    fn create_genome<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Genome;

    /// Scores a genome. Higher is better; never negative, never NaN.
    fn evaluate(&self, genome: &Self::Genome) -> f64;

    /// Recombines two parents into exactly one child.
    fn crossover<R: Rng + ?Sized>(
        &self,
        parent_a: &Self::Genome,
        parent_b: &Self::Genome,
        rng: &mut R,
    ) -> Self::Genome;

    /// Mutates a freshly produced offspring.
    ///
    /// The implementation owns the Bernoulli trial(s) against
    /// `mutation_rate`: most representations roll once per individual, the
    /// bit-vector representation rolls once per gene.
    fn mutate<R: Rng + ?Sized>(&self, genome: &mut Self::Genome, mutation_rate: f64, rng: &mut R);

    /// Stagnation policy used when the run configuration does not name one.
    fn default_stagnation(&self) -> Stagnation {
        Stagnation::IdenticalPopulation
    }
}
