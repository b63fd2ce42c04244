//! Bounded scalar maximization: `f(x) = x²` over integers in `[lo, hi]`.
//!
//! The genome is the integer itself, manipulated as a bit string of
//! [`ScalarSquare::bits`] bits. For the default `[0, 31]` domain that is a
//! 5-bit string, and every crossover and mutation result stays in range
//! without clamping.

use crate::error::ConfigError;
use crate::ga::operators::{bitmask_crossover, flip_low_bit};
use crate::ga::{GaProblem, Stagnation};
use rand::Rng;

/// Maximize `x²` over a bounded non-negative integer domain.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::GaProblem;
/// use u_evolve::problems::ScalarSquare;
///
/// let problem = ScalarSquare::default();
/// assert_eq!(problem.bits(), 5);
/// assert_eq!(problem.evaluate(&31), 961.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarSquare {
    lo: i64,
    hi: i64,
}

impl Default for ScalarSquare {
    fn default() -> Self {
        Self { lo: 0, hi: 31 }
    }
}

impl ScalarSquare {
    /// Creates a problem over `[lo, hi]`.
    ///
    /// Bounds are checked by [`GaProblem::validate`] when a run starts.
    pub fn new(lo: i64, hi: i64) -> Self {
        Self { lo, hi }
    }

    pub fn lo(&self) -> i64 {
        self.lo
    }

    pub fn hi(&self) -> i64 {
        self.hi
    }

    /// Width of the bit string: the number of significant bits of `hi`.
    pub fn bits(&self) -> u32 {
        if self.hi <= 0 {
            0
        } else {
            64 - self.hi.leading_zeros()
        }
    }

    fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.lo, self.hi)
    }
}

impl GaProblem for ScalarSquare {
    type Genome = i64;

    fn validate(&self) -> Result<(), ConfigError> {
        if self.lo < 0 || self.lo > self.hi {
            return Err(ConfigError::InvalidBounds {
                lo: self.lo,
                hi: self.hi,
            });
        }
        Ok(())
    }

    fn create_genome<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.lo..=self.hi)
    }

    fn evaluate(&self, genome: &i64) -> f64 {
        let x = *genome as f64;
        x * x
    }

    /// Crossover point `k` is uniform in `1..bits` (1..=4 for 5 bits).
    fn crossover<R: Rng + ?Sized>(&self, parent_a: &i64, parent_b: &i64, rng: &mut R) -> i64 {
        let bits = self.bits();
        let k = if bits > 1 { rng.random_range(1..bits) } else { bits };
        self.clamp(bitmask_crossover(*parent_a, *parent_b, k))
    }

    fn mutate<R: Rng + ?Sized>(&self, genome: &mut i64, mutation_rate: f64, rng: &mut R) {
        if rng.random::<f64>() < mutation_rate {
            *genome = self.clamp(flip_low_bit(*genome, self.bits(), rng));
        }
    }

    fn default_stagnation(&self) -> Stagnation {
        Stagnation::IdenticalPopulation
    }
}
