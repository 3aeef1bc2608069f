//! # Parley Users Crate
//!
//! User-facing shapes of the Parley data model: user records as seen by the
//! viewer, the viewer's relationships, presence and profiles, plus the
//! session credentials a client holds after logging in.
//!
//! ## Architecture
//!
//! - **Entities**: Wire shapes (User, Profile, Session, ...)
//! - **Types**: Errors and identifier aliases

pub mod entities;
pub mod types;

pub use entities::{
    Presence, Profile, Relationship, RelationshipEntry, Relationships, Session, User, UserStatus,
};
pub use types::{UserError, UserId, UserResult};
