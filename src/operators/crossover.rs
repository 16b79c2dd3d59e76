//! Crossover operators
//!
//! This module provides the recombination strategies: one-point, two-point,
//! and uniform crossover. Each combines two equal-length parents into one
//! child of the same length.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::traits::SequenceGenome;
use crate::operators::traits::CrossoverOperator;

fn parent_dimensions<G: SequenceGenome>(parent1: &G, parent2: &G) -> usize {
    let n = parent1.dimension();
    assert_eq!(n, parent2.dimension(), "parent dimensions must match");
    n
}

/// One-point crossover
///
/// Splices the parents at a single point drawn from `[1, n - 2]`, so both
/// parents always contribute at least one gene. Requires genomes of at least
/// 3 genes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OnePointCrossover;

impl OnePointCrossover {
    /// Create a new one-point crossover
    pub fn new() -> Self {
        Self
    }
}

impl<G: SequenceGenome> CrossoverOperator<G> for OnePointCrossover {
    fn cross<R: Rng>(&self, parent1: &G, parent2: &G, rng: &mut R) -> G {
        let n = parent_dimensions(parent1, parent2);
        assert!(n >= 3, "one-point crossover needs at least 3 genes");

        let point = rng.gen_range(1..=n - 2);
        let genes = parent1.genes()[..point]
            .iter()
            .chain(&parent2.genes()[point..])
            .cloned()
            .collect();
        G::from_genes(genes)
    }
}

/// Two-point crossover
///
/// Draws two distinct interior points `p1 < p2` from `[1, n - 1)` and takes
/// the middle segment from the second parent. Requires genomes of at least
/// 4 genes so that two distinct interior points exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TwoPointCrossover;

impl TwoPointCrossover {
    /// Create a new two-point crossover
    pub fn new() -> Self {
        Self
    }
}

impl<G: SequenceGenome> CrossoverOperator<G> for TwoPointCrossover {
    fn cross<R: Rng>(&self, parent1: &G, parent2: &G, rng: &mut R) -> G {
        let n = parent_dimensions(parent1, parent2);
        assert!(n >= 4, "two-point crossover needs at least 4 genes");

        let first = rng.gen_range(1..n - 1);
        let mut second = rng.gen_range(1..n - 1);
        while second == first {
            second = rng.gen_range(1..n - 1);
        }
        let (lo, hi) = if first < second {
            (first, second)
        } else {
            (second, first)
        };

        let genes = parent1.genes()[..lo]
            .iter()
            .chain(&parent2.genes()[lo..hi])
            .chain(&parent1.genes()[hi..])
            .cloned()
            .collect();
        G::from_genes(genes)
    }
}

/// Uniform crossover
///
/// Flips a fair coin per position to pick each gene from one parent or the
/// other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UniformCrossover;

impl UniformCrossover {
    /// Create a new uniform crossover
    pub fn new() -> Self {
        Self
    }
}

impl<G: SequenceGenome> CrossoverOperator<G> for UniformCrossover {
    fn cross<R: Rng>(&self, parent1: &G, parent2: &G, rng: &mut R) -> G {
        let n = parent_dimensions(parent1, parent2);

        let genes = (0..n)
            .map(|i| {
                if rng.gen::<bool>() {
                    parent1.genes()[i].clone()
                } else {
                    parent2.genes()[i].clone()
                }
            })
            .collect();
        G::from_genes(genes)
    }
}

/// Configured crossover strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverStrategy {
    /// Single splice point
    OnePoint(OnePointCrossover),
    /// Two splice points, middle segment from the second parent
    TwoPoint(TwoPointCrossover),
    /// Per-position coin flip
    Uniform(UniformCrossover),
}

impl CrossoverStrategy {
    /// One-point crossover
    pub fn one_point() -> Self {
        Self::OnePoint(OnePointCrossover::new())
    }

    /// Two-point crossover
    pub fn two_point() -> Self {
        Self::TwoPoint(TwoPointCrossover::new())
    }

    /// Uniform crossover
    pub fn uniform() -> Self {
        Self::Uniform(UniformCrossover::new())
    }

    /// Smallest genome length the strategy can splice
    pub fn min_genome_length(&self) -> usize {
        match self {
            Self::OnePoint(_) => 3,
            Self::TwoPoint(_) => 4,
            Self::Uniform(_) => 3,
        }
    }
}

impl<G: SequenceGenome> CrossoverOperator<G> for CrossoverStrategy {
    fn cross<R: Rng>(&self, parent1: &G, parent2: &G, rng: &mut R) -> G {
        match self {
            Self::OnePoint(op) => op.cross(parent1, parent2, rng),
            Self::TwoPoint(op) => op.cross(parent1, parent2, rng),
            Self::Uniform(op) => op.cross(parent1, parent2, rng),
        }
    }
}
