//! Population type
//!
//! This module provides the Population container. The engine owns exactly one
//! population per generation and replaces it wholesale at the generation
//! boundary; it is never mutated in place across generations.

use rand::Rng;

use crate::fitness::traits::Fitness;
use crate::genome::traits::{GeneSource, SequenceGenome};
use crate::population::individual::Individual;

/// A population of individuals
#[derive(Clone, Debug)]
pub struct Population<G: SequenceGenome> {
    individuals: Vec<Individual<G>>,
}

impl<G: SequenceGenome> Population<G> {
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
        }
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual<G>>) -> Self {
        Self { individuals }
    }

    /// Create a population of random genomes drawn from a gene source
    pub fn random<S, R>(size: usize, length: usize, source: &S, rng: &mut R) -> Self
    where
        S: GeneSource<G>,
        R: Rng,
    {
        let individuals = (0..size)
            .map(|_| Individual::new(source.random_genome(length, rng)))
            .collect();
        Self { individuals }
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual<G>> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual<G>) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual<G>> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual<G>] {
        &self.individuals
    }

    /// Get the best evaluated individual
    ///
    /// Ties are broken deterministically: the lowest index wins.
    pub fn best(&self) -> Option<&Individual<G>> {
        let mut best: Option<&Individual<G>> = None;
        for individual in &self.individuals {
            let fitness = match individual.fitness {
                Some(f) => f,
                None => continue,
            };
            match best {
                Some(b) if b.fitness_value() >= fitness => {}
                _ => best = Some(individual),
            }
        }
        best
    }

    /// Sort the population by fitness, best first
    ///
    /// The sort is stable, so equal-fitness individuals keep their relative
    /// order; unevaluated individuals sink to the end.
    pub fn sort_by_fitness(&mut self) {
        self.individuals.sort_by(|a, b| b.fitness.cmp(&a.fitness));
    }

    /// Evaluate all individuals that do not yet have a cached fitness
    pub fn evaluate<Fit>(&mut self, fitness: &Fit)
    where
        Fit: Fitness<Genome = G>,
    {
        for individual in &mut self.individuals {
            if !individual.is_evaluated() {
                individual.set_fitness(fitness.evaluate(&individual.genome));
            }
        }
    }

    /// Get genome-fitness pairs for selection
    ///
    /// Skips unevaluated individuals; the engine always evaluates a
    /// population before selecting from it.
    pub fn as_fitness_pairs(&self) -> Vec<(G, usize)> {
        self.individuals
            .iter()
            .filter_map(|i| i.fitness.map(|f| (i.genome.clone(), f)))
            .collect()
    }
}

impl<G: SequenceGenome> Default for Population<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: SequenceGenome> std::ops::Index<usize> for Population<G> {
    type Output = Individual<G>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<G: SequenceGenome> IntoIterator for Population<G> {
    type Item = Individual<G>;
    type IntoIter = std::vec::IntoIter<Individual<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}
