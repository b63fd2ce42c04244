//! Per-generation progress reporting.
//!
//! Progress is a side channel: the runner hands a [`GenerationReport`] to a
//! [`Progress`] sink after every generation and never reads anything back,
//! so swapping or removing the sink cannot change a run's outcome.

use std::fmt::Debug;

/// Snapshot of one completed generation.
#[derive(Debug)]
pub struct GenerationReport<'a, G> {
    /// 1-based generation index.
    pub generation: usize,

    /// Best genome seen so far in the run.
    pub best: &'a G,

    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,

    /// Parents selected this generation (the mating pool).
    pub parents: &'a [G],

    /// The population that results from this generation.
    pub population: &'a [G],

    /// Fitness vector, index-aligned with [`population`](Self::population).
    pub fitness: &'a [f64],

    /// Consecutive stagnant generations after this one.
    pub stagnant_generations: usize,
}

/// Receives progress from a running GA.
pub trait Progress<G> {
    /// Called once after every generation.
    fn on_generation(&mut self, report: &GenerationReport<'_, G>);

    /// Called when the run stops because patience ran out.
    fn on_converged(&mut self, _generation: usize) {}
}

/// Discards all progress.
impl<G> Progress<G> for () {
    fn on_generation(&mut self, _report: &GenerationReport<'_, G>) {}
}

/// Logs progress as `tracing` events.
///
/// Generation events are emitted at `INFO` level, carrying the generation
/// index, best fitness, and best genome (via `Debug`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl<G: Debug> Progress<G> for TracingProgress {
    fn on_generation(&mut self, report: &GenerationReport<'_, G>) {
        tracing::info!(
            generation = report.generation,
            best_fitness = report.best_fitness,
            best = ?report.best,
            stagnant = report.stagnant_generations,
            "generation complete"
        );
    }

    fn on_converged(&mut self, generation: usize) {
        tracing::info!(generation, "converged");
    }
}
