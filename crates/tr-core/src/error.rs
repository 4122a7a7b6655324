//! Framework error type.
//!
//! Conditions that merely make routing not applicable (no sign, malformed
//! rule, not a rail) are `Option::None` throughout the workspace, never an
//! error.  `CoreError` covers what is left: bad configuration.

use thiserror::Error;

/// The top-level error type for `tr-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
