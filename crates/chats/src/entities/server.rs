use std::collections::{HashMap, HashSet};

use parley_media::Attachment;
use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, ChatError, ChatResult, RoleId, ServerId, UserId};

/// Pair of permission bitmasks: server scope first, channel scope second.
///
/// The bits are opaque here and travel as a two element array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionTuple(pub u64, pub u64);

/// Named role within a server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub permissions: PermissionTuple,
    /// CSS colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
}

/// Named group of channels in a server's sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub channels: Vec<ChannelId>,
}

/// Channels receiving membership system messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMessageChannels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_joined: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_left: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_kicked: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_banned: Option<ChannelId>,
}

/// Represents a server (a community of channels)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    #[serde(rename = "_id")]
    pub id: ServerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    pub owner: UserId,

    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Channels in display order
    pub channels: Vec<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_messages: Option<SystemMessageChannels>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<HashMap<RoleId, Role>>,
    pub default_permissions: PermissionTuple,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Attachment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<Attachment>,
}

impl PermissionTuple {
    pub fn new(server: u64, channel: u64) -> Self {
        Self(server, channel)
    }

    /// Server scoped bits
    pub fn server(&self) -> u64 {
        self.0
    }

    /// Channel scoped bits
    pub fn channel(&self) -> u64 {
        self.1
    }
}

impl From<(u64, u64)> for PermissionTuple {
    fn from((server, channel): (u64, u64)) -> Self {
        Self(server, channel)
    }
}

impl Server {
    /// Check if the given user owns this server
    pub fn is_owner(&self, user_id: &str) -> bool {
        self.owner == user_id
    }

    /// Look up a role by id
    pub fn role(&self, role_id: &str) -> Option<&Role> {
        self.roles.as_ref()?.get(role_id)
    }

    /// Category containing the given channel
    pub fn category_of(&self, channel_id: &str) -> Option<&Category> {
        self.categories
            .as_ref()?
            .iter()
            .find(|category| category.channels.iter().any(|id| id == channel_id))
    }

    /// Channels not placed in any category, in server order
    pub fn uncategorised_channels(&self) -> Vec<&str> {
        let categorised: HashSet<&str> = self
            .categories
            .iter()
            .flatten()
            .flat_map(|category| category.channels.iter().map(String::as_str))
            .collect();

        self.channels
            .iter()
            .map(String::as_str)
            .filter(|id| !categorised.contains(id))
            .collect()
    }

    /// Validate that categories only group channels of this server, each at most once
    pub fn validate(&self) -> ChatResult<()> {
        if self.name.trim().is_empty() {
            return Err(ChatError::validation("Server name cannot be empty"));
        }

        let known: HashSet<&str> = self.channels.iter().map(String::as_str).collect();
        let mut seen = HashSet::new();

        for category in self.categories.iter().flatten() {
            for channel in &category.channels {
                if !known.contains(channel.as_str()) {
                    return Err(ChatError::validation(format!(
                        "Category {} references unknown channel {}",
                        category.id, channel
                    )));
                }

                if !seen.insert(channel.as_str()) {
                    return Err(ChatError::validation(format!(
                        "Channel {} appears in more than one category",
                        channel
                    )));
                }
            }
        }

        Ok(())
    }
}
