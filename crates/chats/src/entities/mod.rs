//! Domain entities for conversations.
//!
//! Entities never own each other: every link to another entity is an
//! identifier string resolved by whoever consumes these shapes. The only
//! embedded values are file attachments and link embeds.

pub mod channel;
pub mod invite;
pub mod member;
pub mod message;
pub mod server;
pub mod sync;

// Re-export all entity types
pub use channel::{
    Channel, DirectMessageChannel, GroupChannel, LastMessage, SavedMessagesChannel, ServerChannel,
    TextChannel, VoiceChannel,
};
pub use invite::{Invite, RetrievedInvite};
pub use member::{Ban, Member, MemberCompositeKey};
pub use message::{EditedAt, Message, MessageContent, ReplyIntent, SendMessageRequest, SystemMessage};
pub use server::{Category, PermissionTuple, Role, Server, SystemMessageChannels};
pub use sync::{merge_settings, ChannelCompositeKey, ChannelUnread, UserSettings};
