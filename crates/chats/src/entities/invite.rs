use parley_media::Attachment;
use serde::{Deserialize, Serialize};

use crate::types::{ChannelId, InviteCode, ServerId, UserId};

/// Invite record, discriminated by `type`.
///
/// Only server invites exist today; the union leaves room for more kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Invite {
    Server {
        /// Invite code
        #[serde(rename = "_id")]
        code: InviteCode,
        server: ServerId,
        creator: UserId,
        channel: ChannelId,
    },
}

/// Public preview of an invite, fetched by code before joining
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RetrievedInvite {
    Server {
        server_id: ServerId,
        server_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        server_icon: Option<Attachment>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        server_banner: Option<Attachment>,
        channel_id: ChannelId,
        channel_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        channel_description: Option<String>,
        /// Name of the user who created the invite
        user_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_avatar: Option<Attachment>,
    },
}

impl Invite {
    pub fn code(&self) -> &str {
        match self {
            Invite::Server { code, .. } => code,
        }
    }

    pub fn server(&self) -> &str {
        match self {
            Invite::Server { server, .. } => server,
        }
    }

    pub fn channel(&self) -> &str {
        match self {
            Invite::Server { channel, .. } => channel,
        }
    }

    pub fn creator(&self) -> &str {
        match self {
            Invite::Server { creator, .. } => creator,
        }
    }
}

impl RetrievedInvite {
    pub fn server_id(&self) -> &str {
        match self {
            RetrievedInvite::Server { server_id, .. } => server_id,
        }
    }

    pub fn channel_id(&self) -> &str {
        match self {
            RetrievedInvite::Server { channel_id, .. } => channel_id,
        }
    }
}
