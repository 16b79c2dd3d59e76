//! Run results
//!
//! This module provides the result type produced when a run converges.

use std::time::Duration;

use crate::genome::traits::SequenceGenome;

/// Result of an evolution run
///
/// Produced exactly once, when the end condition fires. The best genome is
/// the fittest individual of the terminal population, with ties broken by the
/// lowest population index.
#[derive(Clone, Debug)]
pub struct RunResult<G: SequenceGenome> {
    /// The best genome of the terminal population
    pub best_genome: G,
    /// Fitness of the best genome
    pub best_fitness: usize,
    /// Maximum attainable fitness for the run's target
    pub target_fitness: usize,
    /// Number of generations completed
    pub generations: usize,
    /// Wall time of the run
    pub elapsed: Duration,
    /// Best-of-generation genomes sampled every
    /// [`HISTORY_INTERVAL`](super::evolution::HISTORY_INTERVAL) generations
    pub history: Vec<G>,
    /// Why the run stopped
    pub termination_reason: &'static str,
}

impl<G: SequenceGenome> RunResult<G> {
    /// Human-readable summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Total generations: {}\n\
             Total execution time: {}ms\n\
             Final fitness: {} (target: {})\n\
             Termination: {}",
            self.generations,
            self.elapsed.as_millis(),
            self.best_fitness,
            self.target_fitness,
            self.termination_reason
        )
    }
}
