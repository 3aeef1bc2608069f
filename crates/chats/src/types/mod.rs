//! Shared types for the chats crate.

pub mod errors;

pub use errors::{ChatError, ChatResult};

// Common type aliases
pub type ChannelId = String;
pub type MessageId = String;
pub type ServerId = String;
pub type RoleId = String;
pub type InviteCode = String;
pub type UserId = String;
