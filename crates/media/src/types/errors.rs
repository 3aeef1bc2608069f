//! Error types for media shapes.

use thiserror::Error;

/// Result type alias for media operations
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors raised while checking media shapes
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl MediaError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation { message: message.into() }
    }
}
