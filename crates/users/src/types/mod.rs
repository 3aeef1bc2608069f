//! Shared types for the users crate.

pub mod errors;

pub use errors::{UserError, UserResult};

pub type UserId = String;
pub type SessionId = String;
