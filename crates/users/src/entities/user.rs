use parley_media::Attachment;
use serde::{Deserialize, Serialize};

use crate::types::{UserError, UserId, UserResult};

/// Relationship between the viewer and another user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    None,
    /// The viewer themselves
    User,
    Friend,
    /// Friend request sent by the viewer
    Outgoing,
    /// Friend request received by the viewer
    Incoming,
    Blocked,
    /// The other user blocked the viewer
    BlockedOther,
}

/// One entry of the viewer's relationship list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipEntry {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub status: Relationship,
}

pub type Relationships = Vec<RelationshipEntry>;

/// Presence a user has chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Presence {
    Online,
    Idle,
    Busy,
    Invisible,
}

/// Custom status of a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<Presence>,
}

/// Represents a user as seen by the viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Attachment>,
    /// Only present on the viewer's own user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<Relationships>,

    /// Badge bitfield
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online: Option<bool>,
}

/// Profile shown on a user's card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Attachment>,
}

impl Relationship {
    /// Check whether either side blocked the other
    pub fn is_blocked(&self) -> bool {
        matches!(self, Relationship::Blocked | Relationship::BlockedOther)
    }

    /// Check whether a friend request is pending in either direction
    pub fn is_pending(&self) -> bool {
        matches!(self, Relationship::Outgoing | Relationship::Incoming)
    }
}

impl User {
    const USERNAME_MIN: usize = 2;
    const USERNAME_MAX: usize = 32;

    /// Check if the viewer is friends with this user
    pub fn is_friend(&self) -> bool {
        self.relationship == Some(Relationship::Friend)
    }

    /// Check if this user is blocked in either direction
    pub fn is_blocked(&self) -> bool {
        self.relationship.is_some_and(|relationship| relationship.is_blocked())
    }

    /// Look up the relationship to another user in this user's relation list
    pub fn relationship_with(&self, user_id: &str) -> Option<Relationship> {
        self.relations
            .as_ref()?
            .iter()
            .find(|entry| entry.id == user_id)
            .map(|entry| entry.status)
    }

    /// Presence to display for this user; `None` while offline
    pub fn presence(&self) -> Option<Presence> {
        if self.online != Some(true) {
            return None;
        }

        Some(
            self.status
                .as_ref()
                .and_then(|status| status.presence)
                .unwrap_or(Presence::Online),
        )
    }

    /// Validate user data
    pub fn validate(&self) -> UserResult<()> {
        if self.id.trim().is_empty() {
            return Err(UserError::InvalidUserData("User id cannot be empty".to_string()));
        }

        let length = self.username.chars().count();
        if !(Self::USERNAME_MIN..=Self::USERNAME_MAX).contains(&length) {
            return Err(UserError::InvalidUserData(format!(
                "Username must be between {} and {} characters",
                Self::USERNAME_MIN,
                Self::USERNAME_MAX
            )));
        }

        if let Some(avatar) = &self.avatar {
            avatar
                .validate()
                .map_err(|error| UserError::InvalidUserData(format!("Invalid avatar: {error}")))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(relationship: Option<Relationship>, online: Option<bool>) -> User {
        User {
            id: "01FC17E1WTM2BGE4F3ARN3FDAF".to_string(),
            username: "insert".to_string(),
            avatar: None,
            relations: None,
            badges: None,
            status: None,
            relationship,
            online,
        }
    }

    #[test]
    fn test_relationship_wire_values() {
        let values = [
            ("None", Relationship::None),
            ("User", Relationship::User),
            ("Friend", Relationship::Friend),
            ("Outgoing", Relationship::Outgoing),
            ("Incoming", Relationship::Incoming),
            ("Blocked", Relationship::Blocked),
            ("BlockedOther", Relationship::BlockedOther),
        ];

        for (wire, expected) in values {
            let decoded: Relationship = serde_json::from_value(json!(wire)).unwrap();
            assert_eq!(decoded, expected);
            assert_eq!(serde_json::to_value(decoded).unwrap(), json!(wire));
        }

        assert!(serde_json::from_value::<Relationship>(json!("Enemy")).is_err());
        assert!(serde_json::from_value::<Relationship>(json!("friend")).is_err());
    }

    #[test]
    fn test_relationship_helpers() {
        assert!(user(Some(Relationship::Friend), None).is_friend());
        assert!(user(Some(Relationship::BlockedOther), None).is_blocked());
        assert!(user(Some(Relationship::Blocked), None).is_blocked());
        assert!(!user(None, None).is_blocked());
        assert!(Relationship::Incoming.is_pending());
        assert!(!Relationship::Friend.is_pending());
    }

    #[test]
    fn test_relationship_lookup() {
        let mut me = user(Some(Relationship::User), Some(true));
        assert_eq!(me.relationship_with("someone"), None);

        me.relations = Some(vec![
            RelationshipEntry {
                id: "a".to_string(),
                status: Relationship::Friend,
            },
            RelationshipEntry {
                id: "b".to_string(),
                status: Relationship::Incoming,
            },
        ]);

        assert_eq!(me.relationship_with("b"), Some(Relationship::Incoming));
        assert_eq!(me.relationship_with("c"), None);
    }

    #[test]
    fn test_presence() {
        assert_eq!(user(None, None).presence(), None);
        assert_eq!(user(None, Some(false)).presence(), None);
        assert_eq!(user(None, Some(true)).presence(), Some(Presence::Online));

        let mut busy = user(None, Some(true));
        busy.status = Some(UserStatus {
            text: None,
            presence: Some(Presence::Busy),
        });
        assert_eq!(busy.presence(), Some(Presence::Busy));
    }

    #[test]
    fn test_user_validation() {
        let mut subject = user(None, None);
        assert!(subject.validate().is_ok());

        subject.username = "x".to_string();
        assert!(subject.validate().is_err());

        subject.username = "a".repeat(33);
        assert!(subject.validate().is_err());
    }

    #[test]
    fn test_omitted_fields_stay_absent() {
        let decoded: User = serde_json::from_value(json!({
            "_id": "u1",
            "username": "paw",
            "status": { "text": "" }
        }))
        .unwrap();

        assert!(decoded.avatar.is_none());
        assert!(decoded.online.is_none());
        assert!(decoded.badges.is_none());
        let status = decoded.status.as_ref().unwrap();
        assert_eq!(status.text.as_deref(), Some(""));
        assert!(status.presence.is_none());

        assert_eq!(
            serde_json::to_value(&decoded).unwrap(),
            json!({ "_id": "u1", "username": "paw", "status": { "text": "" } })
        );
    }
}
