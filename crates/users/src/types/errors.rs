//! Error types for user shapes.

use thiserror::Error;

/// Result type alias for user operations
pub type UserResult<T> = Result<T, UserError>;

/// User-related errors
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid user data: {0}")]
    InvalidUserData(String),

    #[error("Invalid session: {0}")]
    InvalidSession(String),
}
