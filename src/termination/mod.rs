//! Termination criteria
//!
//! This module defines the end conditions that stop the evolutionary loop.

use serde::{Deserialize, Serialize};

/// End condition for a run, evaluated once per generation after the
/// population swap.
///
/// Only `MaxGenerations` bounds the run length; `ExactMatch` and
/// `CloseEnough` keep evolving for as long as the best fitness stays below
/// their threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EndCondition {
    /// Stop after this many generations
    MaxGenerations(usize),
    /// Stop when the best fitness reaches the maximum attainable score
    ExactMatch,
    /// Stop when the best fitness reaches this fraction of the maximum
    /// attainable score
    CloseEnough(f64),
}

impl EndCondition {
    /// Check whether the run should stop
    pub fn should_terminate(
        &self,
        generation: usize,
        best_fitness: usize,
        target_fitness: usize,
    ) -> bool {
        match self {
            EndCondition::MaxGenerations(max) => generation >= *max,
            EndCondition::ExactMatch => best_fitness == target_fitness,
            EndCondition::CloseEnough(percentage) => {
                best_fitness as f64 / target_fitness as f64 >= *percentage
            }
        }
    }

    /// Get a description of why termination occurred
    pub fn reason(&self) -> &'static str {
        match self {
            EndCondition::MaxGenerations(_) => "Maximum generations reached",
            EndCondition::ExactMatch => "Exact match found",
            EndCondition::CloseEnough(_) => "Close-enough threshold reached",
        }
    }
}

pub mod prelude {
    pub use super::EndCondition;
}
