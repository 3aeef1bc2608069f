use parley_media::Attachment;
use serde::{Deserialize, Serialize};

use crate::types::{RoleId, ServerId, UserId};

/// Key of a membership or ban record: a user within a server.
///
/// Records are identified by the pair, never by either half alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberCompositeKey {
    pub server: ServerId,
    pub user: UserId,
}

/// Represents a user's membership of a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: MemberCompositeKey,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Attachment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<RoleId>>,
}

/// Represents a user banned from a server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ban {
    #[serde(rename = "_id")]
    pub id: MemberCompositeKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MemberCompositeKey {
    pub fn new(server: impl Into<ServerId>, user: impl Into<UserId>) -> Self {
        Self {
            server: server.into(),
            user: user.into(),
        }
    }
}

impl Member {
    /// Create a bare membership record
    pub fn new(key: MemberCompositeKey) -> Self {
        Self {
            id: key,
            nickname: None,
            avatar: None,
            roles: None,
        }
    }

    pub fn key(&self) -> &MemberCompositeKey {
        &self.id
    }

    /// Check if the member holds the given role
    pub fn has_role(&self, role_id: &str) -> bool {
        self.roles
            .as_ref()
            .is_some_and(|roles| roles.iter().any(|role| role == role_id))
    }

    /// Nickname if set, otherwise the given username
    pub fn display_name<'a>(&'a self, username: &'a str) -> &'a str {
        self.nickname.as_deref().unwrap_or(username)
    }
}

impl Ban {
    pub fn key(&self) -> &MemberCompositeKey {
        &self.id
    }
}
