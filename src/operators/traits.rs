//! Operator traits
//!
//! This module defines the core operator contracts for the genetic algorithm.

use rand::Rng;

use crate::error::EvoResult;
use crate::genome::traits::{GeneSource, SequenceGenome};

/// Selection operator trait
///
/// Picks one parent from the current population. Implementations are pure
/// functions of the population and the random source.
pub trait SelectionOperator<G: SequenceGenome>: Send + Sync {
    /// Select a single individual from the population
    ///
    /// `population` is a non-empty slice of (genome, fitness) pairs; the
    /// returned value is an index into it.
    fn select<R: Rng>(&self, population: &[(G, usize)], rng: &mut R) -> EvoResult<usize>;
}

/// Crossover operator trait
///
/// Combines genetic material from two parents into one child of the same
/// length. Parents of differing lengths are a programming error.
pub trait CrossoverOperator<G: SequenceGenome>: Send + Sync {
    /// Produce a child from two parents
    fn cross<R: Rng>(&self, parent1: &G, parent2: &G, rng: &mut R) -> G;
}

/// Mutation operator trait
///
/// Applies random gene replacement to a genome in place, drawing fresh genes
/// from a [`GeneSource`].
pub trait MutationOperator<G: SequenceGenome>: Send + Sync {
    /// Apply mutation to a genome in place
    fn mutate<S: GeneSource<G>, R: Rng>(&self, genome: &mut G, source: &S, rng: &mut R);
}
