//! Selection strategies for the GA.
//!
//! Selection builds the mating pool for one generation from the current
//! population's fitness vector. Both strategies assume **maximization**
//! (higher fitness = better) and return population indices; the runner
//! clones the chosen genomes.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms" (truncation selection)

use rand::seq::SliceRandom;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Selection;
/// use u_evolve::random::create_rng;
///
/// let fitness = [1.0, 4.0, 0.0, 2.0];
/// let mut rng = create_rng(42);
///
/// let elite = Selection::Truncation.select(&fitness, 2, &mut rng);
/// assert_eq!(elite, vec![1, 3]);
///
/// let pool = Selection::Roulette.select(&fitness, 3, &mut rng);
/// assert_eq!(pool.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection, with replacement.
    ///
    /// When the total fitness is zero the weighting is undefined, so the
    /// population is shuffled and the first `num_parents` indices are taken
    /// instead (uniform, without replacement).
    ///
    /// # Complexity
    /// O(n) per draw
    #[default]
    Roulette,

    /// Elitist rank truncation: the `num_parents` fittest individuals,
    /// without replacement. Ties go to the earliest individual in
    /// population order.
    ///
    /// # Complexity
    /// O(n × num_parents)
    Truncation,
}

impl Selection {
    /// Selects `num_parents` population indices.
    ///
    /// Returns exactly `num_parents` indices whenever
    /// `fitness.len() >= num_parents`; the runner guarantees this through
    /// configuration validation.
    pub fn select<R: Rng + ?Sized>(
        &self,
        fitness: &[f64],
        num_parents: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        if fitness.is_empty() {
            return Vec::new();
        }
        match self {
            Selection::Roulette => roulette(fitness, num_parents, rng),
            Selection::Truncation => truncation(fitness, num_parents),
        }
    }
}

/// Roulette wheel over normalized fitness shares.
fn roulette<R: Rng + ?Sized>(fitness: &[f64], num_parents: usize, rng: &mut R) -> Vec<usize> {
    let total: f64 = fitness.iter().sum();
    if total.is_nan() || total <= 0.0 {
        return uniform_without_replacement(fitness.len(), num_parents, rng);
    }

    // Landing past the end through rounding picks the last weighted slot.
    let fallback = fitness.iter().rposition(|&f| f > 0.0).unwrap_or(fitness.len() - 1);

    (0..num_parents)
        .map(|_| {
            let r: f64 = rng.random();
            let mut cumulative = 0.0;
            for (i, &f) in fitness.iter().enumerate() {
                cumulative += f / total;
                if r <= cumulative {
                    return i;
                }
            }
            fallback
        })
        .collect()
}

/// Shuffle the index range and keep a prefix.
fn uniform_without_replacement<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices.truncate(k);
    indices
}

/// Repeatedly take the first remaining maximum.
fn truncation(fitness: &[f64], num_parents: usize) -> Vec<usize> {
    let mut taken = vec![false; fitness.len()];
    let mut parents = Vec::with_capacity(num_parents.min(fitness.len()));

    for _ in 0..num_parents {
        let mut best: Option<usize> = None;
        for (i, &f) in fitness.iter().enumerate() {
            if taken[i] {
                continue;
            }
            match best {
                Some(b) if f <= fitness[b] => {}
                _ => best = Some(i),
            }
        }
        match best {
            Some(i) => {
                taken[i] = true;
                parents.push(i);
            }
            None => break,
        }
    }

    parents
}
