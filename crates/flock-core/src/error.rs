//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `FlockError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::BoidId;

/// The top-level error type for `flock-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FlockError {
    #[error("boid {0} not found")]
    BoidNotFound(BoidId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `flock-*` crates.
pub type FlockResult<T> = Result<T, FlockError>;
