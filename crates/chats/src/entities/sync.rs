//! State synchronised between a user's clients.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, MessageId, UserId};

/// Synced settings: key to (last modified timestamp in ms, serialised value)
pub type UserSettings = HashMap<String, (i64, String)>;

/// Key of an unread marker: a user within a channel
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChannelCompositeKey {
    pub channel: ChannelId,
    pub user: UserId,
}

/// Read position of a user in a channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelUnread {
    #[serde(rename = "_id")]
    pub id: ChannelCompositeKey,

    /// Last message the user has seen
    pub last_id: MessageId,
    /// Messages mentioning the user since then
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<MessageId>>,
}

impl ChannelCompositeKey {
    pub fn new(channel: impl Into<ChannelId>, user: impl Into<UserId>) -> Self {
        Self {
            channel: channel.into(),
            user: user.into(),
        }
    }
}

impl ChannelUnread {
    pub fn key(&self) -> &ChannelCompositeKey {
        &self.id
    }

    /// Number of outstanding mentions
    pub fn mention_count(&self) -> usize {
        self.mentions.as_ref().map_or(0, Vec::len)
    }

    /// Check whether a channel whose newest message is `latest` has unread content.
    ///
    /// Message ids sort by creation time, so a plain string comparison is enough.
    pub fn is_unread(&self, latest: &str) -> bool {
        self.last_id.as_str() < latest
    }
}

/// Apply remote settings that are newer than the local copy.
///
/// Returns the keys that changed, sorted.
pub fn merge_settings(local: &mut UserSettings, remote: &UserSettings) -> Vec<String> {
    let mut changed: Vec<String> = remote
        .iter()
        .filter(|(key, (remote_ts, _))| {
            local
                .get(*key)
                .map_or(true, |(local_ts, _)| remote_ts > local_ts)
        })
        .map(|(key, _)| key.clone())
        .collect();

    for key in &changed {
        if let Some(entry) = remote.get(key) {
            local.insert(key.clone(), entry.clone());
        }
    }

    changed.sort();
    changed
}
