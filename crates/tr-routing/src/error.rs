use thiserror::Error;

use tr_world::WorldError;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("junction write failed: {0}")]
    World(#[from] WorldError),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
