//! Mutation operators
//!
//! This module provides the two mutation strategies: at most one replacement
//! per chromosome, or an independent replacement chance per gene. Fresh genes
//! come from the configured [`GeneSource`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::traits::{GeneSource, SequenceGenome};
use crate::operators::traits::MutationOperator;

/// Chromosome-level mutation
///
/// With probability `likelihood`, replaces exactly one uniformly-chosen gene
/// with a fresh random gene. At most one replacement per call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChromosomeMutation {
    /// Probability that the chromosome mutates at all
    pub likelihood: f64,
}

impl ChromosomeMutation {
    /// Create a new chromosome-level mutation
    pub fn new(likelihood: f64) -> Self {
        Self { likelihood }
    }
}

impl<G: SequenceGenome> MutationOperator<G> for ChromosomeMutation {
    fn mutate<S: GeneSource<G>, R: Rng>(&self, genome: &mut G, source: &S, rng: &mut R) {
        if rng.gen::<f64>() < self.likelihood {
            let position = rng.gen_range(0..genome.dimension());
            genome.genes_mut()[position] = source.random_gene(rng);
        }
    }
}

/// Gene-level mutation
///
/// Independently for every position, with probability `likelihood`, replaces
/// that position's gene with a fresh random gene. Anywhere from zero to all
/// genes can change in one call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneMutation {
    /// Per-gene replacement probability
    pub likelihood: f64,
}

impl GeneMutation {
    /// Create a new gene-level mutation
    pub fn new(likelihood: f64) -> Self {
        Self { likelihood }
    }
}

impl<G: SequenceGenome> MutationOperator<G> for GeneMutation {
    fn mutate<S: GeneSource<G>, R: Rng>(&self, genome: &mut G, source: &S, rng: &mut R) {
        for position in 0..genome.dimension() {
            if rng.gen::<f64>() < self.likelihood {
                genome.genes_mut()[position] = source.random_gene(rng);
            }
        }
    }
}

/// Configured mutation strategy
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum MutationStrategy {
    /// At most one replacement per chromosome
    Chromosome(ChromosomeMutation),
    /// Independent replacement chance per gene
    Gene(GeneMutation),
}

impl MutationStrategy {
    /// Chromosome-level mutation with the given likelihood
    pub fn chromosome(likelihood: f64) -> Self {
        Self::Chromosome(ChromosomeMutation::new(likelihood))
    }

    /// Gene-level mutation with the given likelihood
    pub fn gene(likelihood: f64) -> Self {
        Self::Gene(GeneMutation::new(likelihood))
    }

    /// The configured mutation likelihood
    pub fn likelihood(&self) -> f64 {
        match self {
            Self::Chromosome(op) => op.likelihood,
            Self::Gene(op) => op.likelihood,
        }
    }
}

impl<G: SequenceGenome> MutationOperator<G> for MutationStrategy {
    fn mutate<S: GeneSource<G>, R: Rng>(&self, genome: &mut G, source: &S, rng: &mut R) {
        match self {
            Self::Chromosome(op) => op.mutate(genome, source, rng),
            Self::Gene(op) => op.mutate(genome, source, rng),
        }
    }
}
