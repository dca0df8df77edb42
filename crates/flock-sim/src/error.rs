use flock_core::{FlockError, WorldBounds};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("flock has {got} boids but the configuration expects {expected}")]
    PopulationMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("flock world {got:?} does not match configured world {expected:?}")]
    WorldMismatch {
        expected: WorldBounds,
        got:      WorldBounds,
    },

    #[error(transparent)]
    Flock(#[from] FlockError),
}

pub type SimResult<T> = Result<T, SimError>;
