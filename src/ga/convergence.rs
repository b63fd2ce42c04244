//! Stagnation detection under a patience window.
//!
//! After every generation the runner asks whether the best-ever fitness
//! improved. If it did not, a [`Stagnation`] policy decides whether the
//! generation counts as stagnant; [`StagnationTracker`] keeps the count of
//! consecutive stagnant generations and reports convergence once it
//! reaches the configured patience.

use crate::error::ConfigError;

/// Tolerance used by [`Stagnation::BestFitnessWithin`] for tour problems.
pub const DEFAULT_FITNESS_TOLERANCE: f64 = 1e-9;

/// Policy deciding whether a non-improving generation is stagnant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stagnation {
    /// The new population holds exactly the same genomes as the previous
    /// one, compared as sorted multisets (order is ignored).
    IdenticalPopulation,

    /// The best fitness of the new generation lies strictly within the
    /// given tolerance of the previous generation's best fitness.
    BestFitnessWithin(f64),

    /// Every generation that does not improve the best-ever fitness is
    /// stagnant.
    NoImprovement,
}

impl Stagnation {
    /// Validates policy parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Stagnation::BestFitnessWithin(tol) if !tol.is_finite() || tol < 0.0 => {
                Err(ConfigError::InvalidTolerance(tol))
            }
            _ => Ok(()),
        }
    }

    /// Compares two consecutive generations.
    pub fn is_stagnant<G: Clone + Ord>(
        &self,
        previous: &[G],
        previous_best: f64,
        current: &[G],
        current_best: f64,
    ) -> bool {
        match *self {
            Stagnation::IdenticalPopulation => same_multiset(previous, current),
            Stagnation::BestFitnessWithin(tol) => (current_best - previous_best).abs() < tol,
            Stagnation::NoImprovement => true,
        }
    }
}

fn same_multiset<G: Clone + Ord>(a: &[G], b: &[G]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Counts consecutive stagnant generations against a patience limit.
#[derive(Debug, Clone)]
pub struct StagnationTracker {
    policy: Stagnation,
    patience: usize,
    stagnant: usize,
}

impl StagnationTracker {
    pub fn new(policy: Stagnation, patience: usize) -> Self {
        Self {
            policy,
            patience,
            stagnant: 0,
        }
    }

    /// Records one generation.
    ///
    /// `improved` is whether the best-ever fitness strictly increased in
    /// this generation; improvement always resets the counter. Returns
    /// `true` once the counter has reached the patience limit.
    pub fn record<G: Clone + Ord>(
        &mut self,
        improved: bool,
        previous: &[G],
        previous_best: f64,
        current: &[G],
        current_best: f64,
    ) -> bool {
        if improved {
            self.stagnant = 0;
        } else if self
            .policy
            .is_stagnant(previous, previous_best, current, current_best)
        {
            self.stagnant += 1;
        } else {
            self.stagnant = 0;
        }
        self.is_converged()
    }

    pub fn is_converged(&self) -> bool {
        self.stagnant >= self.patience
    }

    /// Consecutive stagnant generations so far.
    pub fn stagnant_generations(&self) -> usize {
        self.stagnant
    }
}
