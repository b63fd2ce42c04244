//! Property-based tests for operators, selection, and run invariants.

use proptest::prelude::*;
use u_evolve::ga::operators::{bitmask_crossover, is_permutation, order_crossover_at};
use u_evolve::ga::{GaConfig, GaProblem, GaRunner, GenerationReport, Progress, Selection};
use u_evolve::problems::{Knapsack, Tour};
use u_evolve::random::create_rng;

fn two_permutations() -> impl Strategy<Value = (Vec<usize>, Vec<usize>, usize, usize)> {
    (1usize..40).prop_flat_map(|n| {
        let identity: Vec<usize> = (0..n).collect();
        (
            Just(identity.clone()).prop_shuffle(),
            Just(identity).prop_shuffle(),
            0..n,
            0..n,
        )
    })
}

/// Checks elitism and monotonic best-ever on every generation.
struct InvariantCheck<G> {
    last_best: f64,
    violations: Vec<String>,
    _genome: std::marker::PhantomData<G>,
}

impl<G> InvariantCheck<G> {
    fn new() -> Self {
        Self {
            last_best: f64::NEG_INFINITY,
            violations: Vec::new(),
            _genome: std::marker::PhantomData,
        }
    }
}

impl<G: PartialEq + std::fmt::Debug> Progress<G> for InvariantCheck<G> {
    fn on_generation(&mut self, report: &GenerationReport<'_, G>) {
        if report.best_fitness < self.last_best {
            self.violations.push(format!(
                "generation {}: best-ever fell from {} to {}",
                report.generation, self.last_best, report.best_fitness
            ));
        }
        self.last_best = report.best_fitness;
        for parent in report.parents {
            if !report.population.contains(parent) {
                self.violations.push(format!(
                    "generation {}: parent {parent:?} missing from next population",
                    report.generation
                ));
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn ox_child_is_always_a_permutation((a, b, start, end) in two_permutations()) {
        let child = order_crossover_at(&a, &b, start, end);
        prop_assert_eq!(child.len(), a.len());
        prop_assert!(is_permutation(&child), "invalid child {:?}", child);

        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        prop_assert_eq!(&child[lo..=hi], &a[lo..=hi]);
    }

    #[test]
    fn bitmask_crossover_splits_at_k(a in 0i64..32, b in 0i64..32, k in 1u32..5) {
        let child = bitmask_crossover(a, b, k);
        let mask = (1i64 << k) - 1;
        prop_assert_eq!(child & mask, b & mask);
        prop_assert_eq!(child & !mask, a & !mask);
    }

    #[test]
    fn roulette_zero_total_returns_exactly_num_parents(n in 1usize..60, k_frac in 0.0f64..=1.0, seed in any::<u64>()) {
        let k = ((n as f64 * k_frac) as usize).clamp(1, n);
        let fitness = vec![0.0; n];
        let mut rng = create_rng(seed);
        let parents = Selection::Roulette.select(&fitness, k, &mut rng);
        prop_assert_eq!(parents.len(), k);
        prop_assert!(parents.iter().all(|&i| i < n));
    }

    #[test]
    fn selection_returns_num_parents(
        fitness in prop::collection::vec(0.0f64..100.0, 1..60),
        k_frac in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let n = fitness.len();
        let k = ((n as f64 * k_frac) as usize).clamp(1, n);
        let mut rng = create_rng(seed);
        for selection in [Selection::Roulette, Selection::Truncation] {
            let parents = selection.select(&fitness, k, &mut rng);
            prop_assert_eq!(parents.len(), k);
            prop_assert!(parents.iter().all(|&i| i < n));
        }
    }

    #[test]
    fn truncation_keeps_the_top(
        fitness in prop::collection::vec(0.0f64..10.0, 1..40),
        k_frac in 0.0f64..=1.0,
    ) {
        let n = fitness.len();
        let k = ((n as f64 * k_frac) as usize).clamp(1, n);
        let mut rng = create_rng(0);
        let parents = Selection::Truncation.select(&fitness, k, &mut rng);

        let weakest = parents.iter().map(|&i| fitness[i]).fold(f64::INFINITY, f64::min);
        for (i, &f) in fitness.iter().enumerate() {
            if !parents.contains(&i) {
                prop_assert!(f <= weakest, "left out {} with {} > {}", i, f, weakest);
            }
        }
    }

    #[test]
    fn knapsack_overflowing_weights_score_zero(
        extra in prop::collection::vec(1u64..1000, 1..6),
        capacity in 0u64..100,
    ) {
        let mut weights = vec![u64::MAX];
        weights.extend(&extra);
        let values = vec![1; weights.len()];
        let problem = Knapsack::new(weights, values, capacity);

        let all = vec![true; extra.len() + 1];
        prop_assert_eq!(problem.evaluate(&all), 0.0);
    }

    #[test]
    fn knapsack_overweight_scores_zero(
        items in prop::collection::vec((1u64..20, 1u64..20, any::<bool>()), 1..12),
        capacity in 0u64..60,
    ) {
        let weights = items.iter().map(|t| t.0).collect();
        let values = items.iter().map(|t| t.1).collect();
        let genome: Vec<bool> = items.iter().map(|t| t.2).collect();
        let problem = Knapsack::new(weights, values, capacity);

        let fitness = problem.evaluate(&genome);
        if problem.total_weight(&genome) > u128::from(capacity) {
            prop_assert_eq!(fitness, 0.0);
        } else {
            prop_assert_eq!(fitness, problem.total_value(&genome) as f64);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn knapsack_runs_keep_elitism_and_monotonic_best(seed in any::<u64>(), truncation in any::<bool>()) {
        let selection = if truncation { Selection::Truncation } else { Selection::Roulette };
        let config = GaConfig::new(12, 40, 4, 0.1, 40).with_selection(selection);
        let mut check = InvariantCheck::new();

        let result = GaRunner::run_with(&Knapsack::classic(), &config, &mut create_rng(seed), &mut check)
            .unwrap();

        prop_assert!(check.violations.is_empty(), "{:?}", check.violations);
        prop_assert!(result.best_fitness <= 13.0);
    }

    #[test]
    fn tour_runs_keep_elitism_and_valid_routes(seed in any::<u64>()) {
        let tour = Tour::ten_cities();
        let config = GaConfig::new(16, 30, 6, 0.3, 30);
        let mut check = InvariantCheck::new();

        let result = GaRunner::run_with(&tour, &config, &mut create_rng(seed), &mut check).unwrap();

        prop_assert!(check.violations.is_empty(), "{:?}", check.violations);
        prop_assert!(is_permutation(&result.best));
        prop_assert_eq!(result.best_fitness, tour.evaluate(&result.best));
    }
}
