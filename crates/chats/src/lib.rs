//! # Parley Chats Crate
//!
//! Wire shapes for everything that happens inside conversations: the five
//! channel kinds, messages and their system events, servers with their
//! roles and categories, membership and ban records, invites and the
//! per-channel unread markers synchronised between clients.
//!
//! ## Architecture
//!
//! - **Entities**: Wire shapes (Channel, Message, Server, Member, ...)
//! - **Types**: Errors and identifier aliases
//! - **Utils**: Identifier and content validation
//!
//! ## Usage
//!
//! ```rust
//! use parley_chats::Channel;
//!
//! let channel: Channel = serde_json::from_str(r#"{
//!     "_id": "01F7ZSBSFHQ8TA81725KQCSDDP",
//!     "channel_type": "TextChannel",
//!     "server": "01F7ZSBSFHCAAJQ92ZGTY67HMN",
//!     "name": "general",
//!     "description": ""
//! }"#).unwrap();
//!
//! assert_eq!(channel.channel_type(), "TextChannel");
//! assert_eq!(channel.server(), Some("01F7ZSBSFHCAAJQ92ZGTY67HMN"));
//! ```

pub mod entities;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use entities::{
    Ban, Category, Channel, ChannelCompositeKey, ChannelUnread, DirectMessageChannel, EditedAt,
    GroupChannel, Invite, LastMessage, Member, MemberCompositeKey, Message, MessageContent,
    PermissionTuple, ReplyIntent, RetrievedInvite, Role, SavedMessagesChannel, SendMessageRequest,
    Server, ServerChannel, SystemMessage, SystemMessageChannels, TextChannel, UserSettings,
    VoiceChannel, merge_settings,
};
pub use types::{ChatError, ChatResult};
