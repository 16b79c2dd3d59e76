//! Evolution engine
//!
//! This module provides the validated run configuration, the generational
//! evolution loop, and the run result type.

pub mod config;
pub mod evolution;
pub mod result;

pub mod prelude {
    pub use super::config::*;
    pub use super::evolution::*;
    pub use super::result::*;
}
