//! 0/1 knapsack over a fixed-length inclusion vector.
//!
//! Gene `i` is `true` when item `i` goes in the knapsack. Overweight
//! selections are not repaired; they score exactly zero. Totals are
//! accumulated in `u128`, which cannot overflow for any item count.

use crate::error::ConfigError;
use crate::ga::operators::{flip_bits, single_point_crossover};
use crate::ga::{GaProblem, Stagnation};
use rand::Rng;

/// A 0/1 knapsack instance.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::GaProblem;
/// use u_evolve::problems::Knapsack;
///
/// let problem = Knapsack::classic();
/// let pick = vec![true, true, false, true, false];
/// assert_eq!(problem.total_weight(&pick), 10);
/// assert_eq!(problem.evaluate(&pick), 13.0);
///
/// // Everything: weight 23 > 10, hard penalty.
/// assert_eq!(problem.evaluate(&vec![true; 5]), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Knapsack {
    weights: Vec<u64>,
    values: Vec<u64>,
    capacity: u64,
}

impl Knapsack {
    /// Creates an instance. Item counts are checked by
    /// [`GaProblem::validate`] when a run starts.
    pub fn new(weights: Vec<u64>, values: Vec<u64>, capacity: u64) -> Self {
        Self {
            weights,
            values,
            capacity,
        }
    }

    /// Five items, weights `{2, 3, 4, 5, 9}`, values `{3, 4, 5, 6, 10}`,
    /// capacity 10.
    pub fn classic() -> Self {
        Self::new(vec![2, 3, 4, 5, 9], vec![3, 4, 5, 6, 10], 10)
    }

    pub fn item_count(&self) -> usize {
        self.weights.len()
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Sum of the weights of the selected items.
    pub fn total_weight(&self, selection: &[bool]) -> u128 {
        selected(selection, &self.weights)
    }

    /// Sum of the values of the selected items, ignoring capacity.
    pub fn total_value(&self, selection: &[bool]) -> u128 {
        selected(selection, &self.values)
    }
}

fn selected(selection: &[bool], amounts: &[u64]) -> u128 {
    selection
        .iter()
        .zip(amounts)
        .filter(|&(&take, _)| take)
        .map(|(_, &amount)| u128::from(amount))
        .sum()
}

impl GaProblem for Knapsack {
    type Genome = Vec<bool>;

    fn validate(&self) -> Result<(), ConfigError> {
        if self.weights.len() != self.values.len() {
            return Err(ConfigError::ItemCountMismatch {
                weights: self.weights.len(),
                values: self.values.len(),
            });
        }
        if self.weights.is_empty() {
            return Err(ConfigError::NoItems);
        }
        Ok(())
    }

    fn create_genome<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<bool> {
        (0..self.item_count()).map(|_| rng.random_bool(0.5)).collect()
    }

    fn evaluate(&self, genome: &Vec<bool>) -> f64 {
        if self.total_weight(genome) > u128::from(self.capacity) {
            return 0.0;
        }
        self.total_value(genome) as f64
    }

    /// Positions below a uniform point in `0..len` come from `parent_a`.
    fn crossover<R: Rng + ?Sized>(
        &self,
        parent_a: &Vec<bool>,
        parent_b: &Vec<bool>,
        rng: &mut R,
    ) -> Vec<bool> {
        let k = rng.random_range(0..parent_a.len());
        single_point_crossover(parent_a, parent_b, k)
    }

    /// Every gene flips independently with probability `mutation_rate`.
    fn mutate<R: Rng + ?Sized>(&self, genome: &mut Vec<bool>, mutation_rate: f64, rng: &mut R) {
        flip_bits(genome, mutation_rate, rng);
    }

    fn default_stagnation(&self) -> Stagnation {
        Stagnation::IdenticalPopulation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_over_capacity_scores_zero() {
        let problem = Knapsack::classic();
        let all = vec![true; 5];
        assert_eq!(problem.total_weight(&all), 23);
        assert_eq!(problem.total_value(&all), 28);
        assert_eq!(problem.evaluate(&all), 0.0);

        // One unit over capacity is penalized exactly like picking nothing.
        let over_by_one = vec![true, false, false, false, true];
        assert_eq!(problem.total_weight(&over_by_one), 11);
        assert_eq!(problem.evaluate(&over_by_one), 0.0);
        assert_eq!(problem.evaluate(&vec![false; 5]), 0.0);
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let problem = Knapsack::new(vec![u64::MAX, 2], vec![1, 1], 10);
        assert!(problem.validate().is_ok());

        let both = vec![true, true];
        assert_eq!(problem.total_weight(&both), u128::from(u64::MAX) + 2);
        assert_eq!(problem.evaluate(&both), 0.0);
        assert_eq!(problem.evaluate(&vec![false, true]), 1.0);

        let rich = Knapsack::new(vec![1, 1], vec![u64::MAX, u64::MAX], 10);
        assert_eq!(rich.total_value(&both), 2 * u128::from(u64::MAX));
        assert!(rich.evaluate(&both) > u64::MAX as f64);
    }

    #[test]
    fn test_at_capacity_scores_value() {
        let problem = Knapsack::classic();
        assert_eq!(problem.evaluate(&vec![false, false, false, false, true]), 10.0);
        assert_eq!(problem.evaluate(&vec![true, true, false, true, false]), 13.0);
    }

    #[test]
    fn test_validate() {
        assert!(Knapsack::classic().validate().is_ok());
        assert_eq!(
            Knapsack::new(vec![], vec![], 5).validate(),
            Err(ConfigError::NoItems)
        );
        assert_eq!(
            Knapsack::new(vec![1, 2], vec![1], 5).validate(),
            Err(ConfigError::ItemCountMismatch {
                weights: 2,
                values: 1
            })
        );
    }

    #[test]
    fn test_create_has_item_count_genes() {
        let problem = Knapsack::classic();
        let mut rng = create_rng(42);
        for _ in 0..50 {
            assert_eq!(problem.create_genome(&mut rng).len(), 5);
        }
    }

    #[test]
    fn test_crossover_prefix_from_first_parent() {
        let problem = Knapsack::classic();
        let mut rng = create_rng(42);
        let ones = vec![true; 5];
        let zeros = vec![false; 5];
        for _ in 0..100 {
            let child = problem.crossover(&ones, &zeros, &mut rng);
            let k = child.iter().take_while(|&&g| g).count();
            assert!(child[k..].iter().all(|&g| !g), "not a single cut: {child:?}");
            assert!(k < 5, "k is drawn from 0..len");
        }
    }

    #[test]
    fn test_mutation_is_per_gene() {
        let problem = Knapsack::new(vec![1; 40], vec![1; 40], 40);
        let mut rng = create_rng(3);
        let mut genome = vec![false; 40];
        problem.mutate(&mut genome, 1.0, &mut rng);
        assert!(genome.iter().all(|&g| g));
    }
}
