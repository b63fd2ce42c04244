//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! replacement → repeat.

use super::config::GaConfig;
use super::convergence::StagnationTracker;
use super::progress::{GenerationReport, Progress, TracingProgress};
use super::types::GaProblem;
use crate::error::ConfigError;
use crate::random::rng_from_seed;
use rand::Rng;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The stagnation counter reached the configured patience.
    Converged,
    /// All `max_generations` generations were executed.
    BudgetExhausted,
}

/// Result of a GA optimization run.
///
/// Contains the best solution found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult<G> {
    /// The best genome found during the entire run.
    pub best: G,

    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Why the run stopped.
    pub termination: Termination,

    /// Best-ever fitness for the initial population and after each
    /// generation (`generations + 1` entries).
    pub fitness_history: Vec<f64>,
}

impl<G> GaResult<G> {
    /// Whether the run stopped on stagnation.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// Consumes the result, keeping only the best genome and its fitness.
    pub fn into_best(self) -> (G, f64) {
        (self.best, self.best_fitness)
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_evolve::ga::{GaConfig, GaRunner};
/// use u_evolve::problems::ScalarSquare;
///
/// let config = GaConfig::new(10, 100, 4, 0.1, 10).with_seed(42);
/// let result = GaRunner::run(&ScalarSquare::default(), &config).unwrap();
/// assert!(result.best_fitness <= 961.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Seeds the RNG from `config.seed` (or OS entropy) and reports
    /// progress through `tracing` via [`TracingProgress`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the configuration or the problem
    /// definition is invalid. Nothing is executed in that case.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Genome>, ConfigError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with(problem, config, &mut rng, &mut TracingProgress)
    }

    /// Runs the GA with an injected random source and progress sink.
    ///
    /// `config.seed` is ignored; all randomness comes from `rng`, in a
    /// fixed order per generation: selection, then one crossover per
    /// offspring, then one mutation pass per offspring.
    pub fn run_with<P, R, S>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        progress: &mut S,
    ) -> Result<GaResult<P::Genome>, ConfigError>
    where
        P: GaProblem,
        R: Rng + ?Sized,
        S: Progress<P::Genome> + ?Sized,
    {
        let policy = config
            .validate()
            .and_then(|()| problem.validate())
            .map(|()| config.stagnation.unwrap_or_else(|| problem.default_stagnation()))
            .and_then(|policy| policy.validate().map(|()| policy));
        let policy = match policy {
            Ok(policy) => policy,
            Err(err) => {
                tracing::warn!(%err, "rejecting GA configuration");
                return Err(err);
            }
        };

        tracing::debug!(
            population_size = config.population_size,
            max_generations = config.max_generations,
            num_parents = config.num_parents,
            mutation_rate = config.mutation_rate,
            patience = config.patience,
            selection = ?config.selection,
            stagnation = ?policy,
            "starting GA run"
        );

        // 1. Initialize and evaluate
        let mut population: Vec<P::Genome> = (0..config.population_size)
            .map(|_| problem.create_genome(rng))
            .collect();
        let mut fitness = evaluate_population(problem, &population, config.parallel);

        // 2. Track best
        let first = best_index(&fitness);
        let mut best = population[first].clone();
        let mut best_fitness = fitness[first];
        let mut previous_best = best_fitness;

        let mut tracker = StagnationTracker::new(policy, config.patience);
        let mut fitness_history = Vec::new();
        fitness_history.push(best_fitness);

        // 3. Evolutionary loop
        for gen in 0..config.max_generations {
            let generation = gen + 1;

            // Selection
            let parents: Vec<P::Genome> = config
                .selection
                .select(&fitness, config.num_parents, rng)
                .into_iter()
                .map(|i| population[i].clone())
                .collect();

            // Crossover, then mutation
            let mut offspring = recombine(problem, &parents, config.offspring_count(), rng);
            for child in offspring.iter_mut() {
                problem.mutate(child, config.mutation_rate, rng);
            }

            // Replacement: parents survive unchanged
            let mut next = Vec::with_capacity(config.population_size);
            next.extend_from_slice(&parents);
            next.append(&mut offspring);
            let next_fitness = evaluate_population(problem, &next, config.parallel);

            // Update best
            let current = best_index(&next_fitness);
            let current_best = next_fitness[current];
            let improved = current_best > best_fitness;
            if improved {
                best = next[current].clone();
                best_fitness = current_best;
            }

            let converged =
                tracker.record(improved, &population, previous_best, &next, current_best);

            population = next;
            fitness = next_fitness;
            previous_best = current_best;
            fitness_history.push(best_fitness);

            progress.on_generation(&GenerationReport {
                generation,
                best: &best,
                best_fitness,
                parents: &parents,
                population: &population,
                fitness: &fitness,
                stagnant_generations: tracker.stagnant_generations(),
            });

            // Stagnation check
            if converged {
                progress.on_converged(generation);
                return Ok(GaResult {
                    best,
                    best_fitness,
                    generations: generation,
                    termination: Termination::Converged,
                    fitness_history,
                });
            }
        }

        Ok(GaResult {
            best,
            best_fitness,
            generations: config.max_generations,
            termination: Termination::BudgetExhausted,
            fitness_history,
        })
    }
}

/// Produces `count` children, each from two parents drawn uniformly with
/// replacement from the mating pool.
fn recombine<P, R>(problem: &P, parents: &[P::Genome], count: usize, rng: &mut R) -> Vec<P::Genome>
where
    P: GaProblem,
    R: Rng + ?Sized,
{
    (0..count)
        .map(|_| {
            let a = &parents[rng.random_range(0..parents.len())];
            let b = &parents[rng.random_range(0..parents.len())];
            problem.crossover(a, b, rng)
        })
        .collect()
}

/// Evaluate all individuals, index-aligned with `population`.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &[P::Genome],
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            return population.par_iter().map(|g| problem.evaluate(g)).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(|g| problem.evaluate(g)).collect()
}

/// Index of the highest fitness; ties go to the first occurrence.
fn best_index(fitness: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > fitness[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
