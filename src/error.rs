//! Error types for aria-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Top-level error type for evolution operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// Invalid configuration, rejected before a run starts
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Roulette selection requires at least one individual with non-zero fitness
    #[error("Roulette selection over a population with zero total fitness")]
    ZeroTotalFitness,

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,

    /// A token could not be parsed as note notation
    #[error("Invalid notation {token:?}: {reason}")]
    Notation { token: String, reason: String },
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = EvolutionError::Configuration("population size must be at least 2".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: population size must be at least 2"
        );
    }

    #[test]
    fn test_zero_total_fitness_display() {
        let err = EvolutionError::ZeroTotalFitness;
        assert_eq!(
            err.to_string(),
            "Roulette selection over a population with zero total fitness"
        );
    }

    #[test]
    fn test_notation_error_display() {
        let err = EvolutionError::Notation {
            token: "X".to_string(),
            reason: "unknown note letter".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid notation \"X\": unknown note letter");
    }
}
