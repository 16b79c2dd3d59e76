//! Individual wrapper type
//!
//! This module provides the Individual type that wraps a genome with its
//! lazily computed fitness.

use serde::{Deserialize, Serialize};

use crate::genome::traits::SequenceGenome;

/// An individual in the population
///
/// Wraps a genome with a cached fitness value. The cache is filled when the
/// population is evaluated; elites cloned into the next generation keep it,
/// since they are carried over unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Individual<G: SequenceGenome> {
    /// The genome of this individual
    pub genome: G,
    /// The fitness value (None if not yet evaluated)
    pub fitness: Option<usize>,
}

impl<G: SequenceGenome> Individual<G> {
    /// Create a new individual with an unevaluated genome
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    /// Create a new individual with a known fitness
    pub fn with_fitness(genome: G, fitness: usize) -> Self {
        Self {
            genome,
            fitness: Some(fitness),
        }
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Get the fitness value, panicking if not evaluated
    pub fn fitness_value(&self) -> usize {
        self.fitness.expect("individual has not been evaluated")
    }

    /// Set the fitness value
    pub fn set_fitness(&mut self, fitness: usize) {
        self.fitness = Some(fitness);
    }

    /// Get a reference to the genome
    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// Take the genome out of this individual
    pub fn into_genome(self) -> G {
        self.genome
    }
}
