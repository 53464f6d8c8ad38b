//! Simulation error type.
//!
//! The core is pure in-memory computation, so the only failures are
//! configuration errors caught before the first tick.  Degenerate numeric
//! inputs (zero vectors, zero distances) are guarded where they occur and
//! never surface here.

use thiserror::Error;

/// Configuration errors for `flock-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum FlockError {
    #[error("population size must be positive, got {population}")]
    InvalidPopulation { population: usize },

    #[error("neighbor count {neighbor_count} must be smaller than population {population}")]
    NeighborCount {
        neighbor_count: usize,
        population:     usize,
    },

    #[error("maximum speed must be positive and finite, got {0}")]
    InvalidMaxSpeed(f32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `flock-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;
