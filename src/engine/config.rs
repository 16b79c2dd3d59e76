//! Run configuration
//!
//! This module provides the immutable, validated parameter bundle consumed by
//! the engine. Configurations are constructed through a builder whose
//! `build()` validates every field and rejects the whole bundle on the first
//! invalid one, so a run never starts from a partially valid state.

use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};
use crate::operators::crossover::CrossoverStrategy;
use crate::operators::mutation::MutationStrategy;
use crate::operators::selection::{SelectionStrategy, TournamentSelection};
use crate::termination::EndCondition;

/// Immutable, validated run configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    population_size: usize,
    end_condition: EndCondition,
    selection: SelectionStrategy,
    crossover: CrossoverStrategy,
    mutation: MutationStrategy,
    elitism_count: usize,
}

impl EvolutionConfig {
    /// Start building a configuration for the given population size
    pub fn builder(population_size: usize) -> EvolutionConfigBuilder {
        EvolutionConfigBuilder::new(population_size)
    }

    /// Number of individuals per generation
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// The configured end condition
    pub fn end_condition(&self) -> EndCondition {
        self.end_condition
    }

    /// The configured selection strategy
    pub fn selection(&self) -> SelectionStrategy {
        self.selection
    }

    /// The configured crossover strategy
    pub fn crossover(&self) -> CrossoverStrategy {
        self.crossover
    }

    /// The configured mutation strategy
    pub fn mutation(&self) -> MutationStrategy {
        self.mutation
    }

    /// Number of elites copied unchanged into each new generation
    pub fn elitism_count(&self) -> usize {
        self.elitism_count
    }
}

/// Builder for [`EvolutionConfig`]
#[derive(Clone, Debug)]
pub struct EvolutionConfigBuilder {
    population_size: usize,
    end_condition: Option<EndCondition>,
    selection: Option<SelectionStrategy>,
    crossover: Option<CrossoverStrategy>,
    mutation: Option<MutationStrategy>,
    elitism_count: usize,
}

impl EvolutionConfigBuilder {
    /// Create a new builder with the given population size
    pub fn new(population_size: usize) -> Self {
        Self {
            population_size,
            end_condition: None,
            selection: None,
            crossover: None,
            mutation: None,
            elitism_count: 0,
        }
    }

    /// Set the end condition
    pub fn end_condition(mut self, end_condition: EndCondition) -> Self {
        self.end_condition = Some(end_condition);
        self
    }

    /// Set the selection strategy
    pub fn selection(mut self, selection: SelectionStrategy) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Set the crossover strategy
    pub fn crossover(mut self, crossover: CrossoverStrategy) -> Self {
        self.crossover = Some(crossover);
        self
    }

    /// Set the mutation strategy
    pub fn mutation(mut self, mutation: MutationStrategy) -> Self {
        self.mutation = Some(mutation);
        self
    }

    /// Set the number of elites copied into each new generation (default 0)
    pub fn elitism_count(mut self, elitism_count: usize) -> Self {
        self.elitism_count = elitism_count;
        self
    }

    /// Validate the whole bundle and build the configuration
    pub fn build(self) -> EvoResult<EvolutionConfig> {
        if self.population_size < 2 {
            return Err(EvolutionError::Configuration(
                "population size must be at least 2 to draw distinct parents".to_string(),
            ));
        }

        let end_condition = self.end_condition.ok_or_else(|| {
            EvolutionError::Configuration("an end condition must be specified".to_string())
        })?;
        match end_condition {
            EndCondition::MaxGenerations(0) => {
                return Err(EvolutionError::Configuration(
                    "maximum generations must be positive".to_string(),
                ));
            }
            EndCondition::CloseEnough(percentage) if !(0.0..=1.0).contains(&percentage) => {
                return Err(EvolutionError::Configuration(format!(
                    "close-enough percentage must be in [0, 1], got {}",
                    percentage
                )));
            }
            _ => {}
        }

        let selection = self.selection.ok_or_else(|| {
            EvolutionError::Configuration("a selection strategy must be specified".to_string())
        })?;
        if let SelectionStrategy::Tournament(TournamentSelection { tournament_size }) = selection {
            if tournament_size < 1 || tournament_size > self.population_size {
                return Err(EvolutionError::Configuration(format!(
                    "tournament size must be in [1, {}], got {}",
                    self.population_size, tournament_size
                )));
            }
        }

        let crossover = self.crossover.ok_or_else(|| {
            EvolutionError::Configuration("a crossover strategy must be specified".to_string())
        })?;

        let mutation = self.mutation.ok_or_else(|| {
            EvolutionError::Configuration("a mutation strategy must be specified".to_string())
        })?;
        if !(0.0..=1.0).contains(&mutation.likelihood()) {
            return Err(EvolutionError::Configuration(format!(
                "mutation likelihood must be in [0, 1], got {}",
                mutation.likelihood()
            )));
        }

        if self.elitism_count > self.population_size {
            return Err(EvolutionError::Configuration(format!(
                "elitism count must be in [0, {}], got {}",
                self.population_size, self.elitism_count
            )));
        }

        Ok(EvolutionConfig {
            population_size: self.population_size,
            end_condition,
            selection,
            crossover,
            mutation,
            elitism_count: self.elitism_count,
        })
    }
}
