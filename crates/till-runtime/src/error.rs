//! # Runtime Error Type
//!
//! Unified error type for the host layer.
//!
//! ```text
//! ConfigError ──┐
//! CoreError ────┼──► RuntimeError ──► caller
//! poisoned lock ┘
//! ```

use thiserror::Error;
use till_core::CoreError;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

/// Errors surfaced by `till-runtime`.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A register operation rejected its arguments.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A thread panicked while holding the register lock.
    #[error("Register state is poisoned")]
    StatePoisoned,

    /// The log filter directives could not be parsed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl RuntimeError {
    /// Whether the caller passed bad input, as opposed to a host failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RuntimeError::Core(CoreError::InvalidArgument(_)))
    }
}

/// Convenience type alias for Results with RuntimeError.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
