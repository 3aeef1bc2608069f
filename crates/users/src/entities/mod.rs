//! Domain entities for users and their sessions.
//!
//! These are plain wire records. Cross references to other entities are
//! identifier strings, never embedded values, apart from file attachments.

pub mod auth;
pub mod user;

pub use auth::Session;
pub use user::{Presence, Profile, Relationship, RelationshipEntry, Relationships, User, UserStatus};
