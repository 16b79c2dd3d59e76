//! # aria-evo
//!
//! A generational genetic algorithm library for Rust.
//!
//! This library evolves a population of fixed-length gene sequences toward a
//! target, driven by pluggable selection, crossover, and mutation strategies.
//! The engine is domain-agnostic; domain semantics enter only through two
//! hooks: a [`GeneSource`](genome::traits::GeneSource) that produces random
//! genes, and a [`Fitness`](fitness::traits::Fitness) function that scores
//! candidates against the target. The built-in domain instance evolves
//! melodies: sequences of MIDI pitches paired with duration symbols.
//!
//! ## Quick Start
//!
//! ```rust
//! use aria_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let target = notation::parse_melody("E D C D E E E")?;
//! let config = EvolutionConfig::builder(20)
//!     .end_condition(EndCondition::MaxGenerations(200))
//!     .selection(SelectionStrategy::tournament(4))
//!     .crossover(CrossoverStrategy::one_point())
//!     .mutation(MutationStrategy::gene(0.05))
//!     .elitism_count(2)
//!     .build()?;
//!
//! let result = Evolution::new(config, NoteMatch::new(target), NoteSource).run(&mut rng)?;
//! println!("{}", result.summary());
//! # Ok::<(), aria_evo::EvolutionError>(())
//! ```

pub mod engine;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;
pub mod termination;

pub use error::{EvoResult, EvolutionError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::termination::prelude::*;
}
