//! World-access error type.

use thiserror::Error;

use tr_core::Cell;

/// Errors produced when writing to the world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("cell {0} is not a rail")]
    NotTrack(Cell),

    #[error("cell {0} is outside loaded world data")]
    Unloaded(Cell),
}

pub type WorldResult<T> = Result<T, WorldError>;
