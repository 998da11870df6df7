//! Error types for color operations.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A color literal could not be parsed.
    #[error("invalid color value: {0}")]
    InvalidValue(String),

    /// Sampling a buffer failed (usually out of bounds).
    #[error(transparent)]
    Core(#[from] retouch_core::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
