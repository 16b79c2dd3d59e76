//! Core genome traits
//!
//! This module defines the `SequenceGenome` trait and the `GeneSource` hook
//! through which domain-specific gene generation enters the engine.

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

/// Core genome abstraction for fixed-length sequence evolution.
///
/// A genome is an ordered, fixed-length sequence of alleles. Its length is set
/// when it is constructed and never changes; operators that combine or perturb
/// genomes preserve it. Genomes must be cloneable, serializable, and
/// thread-safe.
pub trait SequenceGenome: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The allele type for individual genes
    type Allele: Clone + PartialEq + Send + Sync;

    /// Get the genes as a slice
    fn genes(&self) -> &[Self::Allele];

    /// Get the genes as a mutable slice
    fn genes_mut(&mut self) -> &mut [Self::Allele];

    /// Create a genome from a vector of genes
    fn from_genes(genes: Vec<Self::Allele>) -> Self;

    /// Number of genes in this genome
    fn dimension(&self) -> usize {
        self.genes().len()
    }
}

/// Gene-generation hook.
///
/// The engine never invents genes itself; it asks a `GeneSource` whenever it
/// needs fresh genetic material, both when seeding the initial population and
/// when a mutation replaces a gene. Implementing this trait for a new allele
/// type is all it takes to reuse the engine on a different domain.
pub trait GeneSource<G: SequenceGenome>: Send + Sync {
    /// Produce one random gene
    fn random_gene<R: Rng>(&self, rng: &mut R) -> G::Allele;

    /// Produce a whole random genome of the given length
    fn random_genome<R: Rng>(&self, length: usize, rng: &mut R) -> G {
        G::from_genes((0..length).map(|_| self.random_gene(rng)).collect())
    }
}
