//! Shared types for the media crate.

pub mod errors;

pub use errors::{MediaError, MediaResult};

/// Identifier of a stored file.
pub type FileId = String;
