use std::collections::HashMap;

use parley_media::Attachment;
use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, MessageId, RoleId, ServerId, UserId};

/// Summary of the latest message in a direct message or group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMessage {
    #[serde(rename = "_id")]
    pub id: MessageId,
    pub author: UserId,
    /// Truncated message content
    pub short: String,
}

/// Personal notes channel of a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedMessagesChannel {
    #[serde(rename = "_id")]
    pub id: ChannelId,
    pub user: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

/// Conversation between two users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessageChannel {
    #[serde(rename = "_id")]
    pub id: ChannelId,
    /// Whether the conversation is open for the viewer
    pub active: bool,
    pub recipients: Vec<UserId>,
    pub last_message: LastMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

/// Named conversation between several users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupChannel {
    #[serde(rename = "_id")]
    pub id: ChannelId,
    pub recipients: Vec<UserId>,

    pub name: String,
    pub owner: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub last_message: LastMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Attachment>,

    /// Channel permission bits granted to members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

/// Fields shared by every channel that belongs to a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerChannel {
    #[serde(rename = "_id")]
    pub id: ChannelId,
    pub server: ServerId,

    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Attachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_permissions: Option<u64>,
    /// Channel permission bits keyed by role id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_permissions: Option<HashMap<RoleId, u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

/// Server text channel.
///
/// Unlike direct messages and groups, only the id of the latest message is
/// carried here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextChannel {
    #[serde(flatten)]
    pub channel: ServerChannel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<MessageId>,
}

/// Server voice channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceChannel {
    #[serde(flatten)]
    pub channel: ServerChannel,
}

/// Any channel, discriminated by `channel_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel_type")]
pub enum Channel {
    SavedMessages(SavedMessagesChannel),
    DirectMessage(DirectMessageChannel),
    Group(GroupChannel),
    TextChannel(TextChannel),
    VoiceChannel(VoiceChannel),
}

impl Channel {
    /// Channel identifier
    pub fn id(&self) -> &str {
        match self {
            Channel::SavedMessages(channel) => &channel.id,
            Channel::DirectMessage(channel) => &channel.id,
            Channel::Group(channel) => &channel.id,
            Channel::TextChannel(TextChannel { channel, .. })
            | Channel::VoiceChannel(VoiceChannel { channel }) => &channel.id,
        }
    }

    /// Wire value of the `channel_type` tag
    pub fn channel_type(&self) -> &'static str {
        match self {
            Channel::SavedMessages(_) => "SavedMessages",
            Channel::DirectMessage(_) => "DirectMessage",
            Channel::Group(_) => "Group",
            Channel::TextChannel(_) => "TextChannel",
            Channel::VoiceChannel(_) => "VoiceChannel",
        }
    }

    /// Shared server channel fields, for text and voice channels
    pub fn server_channel(&self) -> Option<&ServerChannel> {
        match self {
            Channel::TextChannel(TextChannel { channel, .. })
            | Channel::VoiceChannel(VoiceChannel { channel }) => Some(channel),
            _ => None,
        }
    }

    /// Check if this channel belongs to a server
    pub fn is_server_channel(&self) -> bool {
        self.server_channel().is_some()
    }

    /// Server the channel belongs to
    pub fn server(&self) -> Option<&str> {
        self.server_channel().map(|channel| channel.server.as_str())
    }

    /// Display name, for groups and server channels
    pub fn name(&self) -> Option<&str> {
        match self {
            Channel::Group(group) => Some(&group.name),
            _ => self.server_channel().map(|channel| channel.name.as_str()),
        }
    }

    /// Users taking part in a direct message or group
    pub fn recipients(&self) -> &[UserId] {
        match self {
            Channel::DirectMessage(channel) => &channel.recipients,
            Channel::Group(channel) => &channel.recipients,
            _ => &[],
        }
    }

    /// Id of the latest message, whichever way the channel kind carries it
    pub fn last_message_id(&self) -> Option<&str> {
        match self {
            Channel::DirectMessage(channel) => Some(&channel.last_message.id),
            Channel::Group(channel) => Some(&channel.last_message.id),
            Channel::TextChannel(channel) => channel.last_message.as_deref(),
            Channel::SavedMessages(_) | Channel::VoiceChannel(_) => None,
        }
    }

    /// Icon, for groups and server channels
    pub fn icon(&self) -> Option<&Attachment> {
        match self {
            Channel::Group(group) => group.icon.as_ref(),
            _ => self.server_channel().and_then(|channel| channel.icon.as_ref()),
        }
    }

    /// Client nonce echoed back on creation
    pub fn nonce(&self) -> Option<&str> {
        match self {
            Channel::SavedMessages(channel) => channel.nonce.as_deref(),
            Channel::DirectMessage(channel) => channel.nonce.as_deref(),
            Channel::Group(channel) => channel.nonce.as_deref(),
            Channel::TextChannel(TextChannel { channel, .. })
            | Channel::VoiceChannel(VoiceChannel { channel }) => channel.nonce.as_deref(),
        }
    }
}
