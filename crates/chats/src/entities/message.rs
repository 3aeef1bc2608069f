use chrono::{DateTime, Utc};
use parley_media::{Attachment, Embed};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::types::{ChannelId, ChatError, ChatResult, MessageId, UserId};
use crate::utils::Validator;

/// Event recorded by the platform in place of user written content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SystemMessage {
    Text { content: String },
    UserAdded { id: UserId, by: UserId },
    UserRemove { id: UserId, by: UserId },
    UserJoined { id: UserId },
    UserLeft { id: UserId },
    UserKicked { id: UserId },
    UserBanned { id: UserId },
    ChannelRenamed { name: String, by: UserId },
    ChannelDescriptionChanged { by: UserId },
    ChannelIconChanged { by: UserId },
}

/// Message body: free text or a system event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    System(SystemMessage),
}

/// Edit timestamp in extended JSON form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditedAt {
    #[serde(rename = "$date")]
    pub date: String,
}

/// Represents a message within a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: MessageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    pub channel: ChannelId,
    pub author: UserId,

    pub content: MessageContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited: Option<EditedAt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<UserId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<MessageId>>,
}

/// Reference to a message being replied to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyIntent {
    pub id: MessageId,
    /// Whether the author of the referenced message is pinged
    pub mention: bool,
}

/// Request to send a new message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    pub nonce: String,
    /// Ids of files already uploaded to the media service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<ReplyIntent>>,
}

impl SystemMessage {
    /// Wire value of the `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            SystemMessage::Text { .. } => "text",
            SystemMessage::UserAdded { .. } => "user_added",
            SystemMessage::UserRemove { .. } => "user_remove",
            SystemMessage::UserJoined { .. } => "user_joined",
            SystemMessage::UserLeft { .. } => "user_left",
            SystemMessage::UserKicked { .. } => "user_kicked",
            SystemMessage::UserBanned { .. } => "user_banned",
            SystemMessage::ChannelRenamed { .. } => "channel_renamed",
            SystemMessage::ChannelDescriptionChanged { .. } => "channel_description_changed",
            SystemMessage::ChannelIconChanged { .. } => "channel_icon_changed",
        }
    }

    /// User who caused the event, when the event records one
    pub fn actor(&self) -> Option<&str> {
        match self {
            SystemMessage::UserAdded { by, .. }
            | SystemMessage::UserRemove { by, .. }
            | SystemMessage::ChannelRenamed { by, .. }
            | SystemMessage::ChannelDescriptionChanged { by }
            | SystemMessage::ChannelIconChanged { by } => Some(by),
            SystemMessage::UserJoined { id } | SystemMessage::UserLeft { id } => Some(id),
            SystemMessage::Text { .. } | SystemMessage::UserKicked { .. } | SystemMessage::UserBanned { .. } => None,
        }
    }

    /// User the event happened to
    pub fn subject(&self) -> Option<&str> {
        match self {
            SystemMessage::UserAdded { id, .. }
            | SystemMessage::UserRemove { id, .. }
            | SystemMessage::UserJoined { id }
            | SystemMessage::UserLeft { id }
            | SystemMessage::UserKicked { id }
            | SystemMessage::UserBanned { id } => Some(id),
            SystemMessage::Text { .. }
            | SystemMessage::ChannelRenamed { .. }
            | SystemMessage::ChannelDescriptionChanged { .. }
            | SystemMessage::ChannelIconChanged { .. } => None,
        }
    }
}

impl<'de> Deserialize<'de> for MessageContent {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        match Value::deserialize(d)? {
            Value::String(text) => Ok(MessageContent::Text(text)),
            value @ Value::Object(_) => SystemMessage::deserialize(value)
                .map(MessageContent::System)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected text or a system message, found {other}"
            ))),
        }
    }
}

impl EditedAt {
    /// Parse the timestamp
    pub fn parse(&self) -> ChatResult<DateTime<Utc>> {
        Ok(DateTime::parse_from_rfc3339(&self.date)?.with_timezone(&Utc))
    }
}

impl From<DateTime<Utc>> for EditedAt {
    fn from(date: DateTime<Utc>) -> Self {
        Self {
            date: date.to_rfc3339(),
        }
    }
}

impl Message {
    /// Check if this message records a system event
    pub fn is_system(&self) -> bool {
        matches!(self.content, MessageContent::System(_))
    }

    /// Plain text content, if the message is not a system event
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            MessageContent::Text(text) => Some(text),
            MessageContent::System(_) => None,
        }
    }

    /// System event, if the message records one
    pub fn system(&self) -> Option<&SystemMessage> {
        match &self.content {
            MessageContent::System(system) => Some(system),
            MessageContent::Text(_) => None,
        }
    }

    /// Check if the message mentions the given user
    pub fn mentions_user(&self, user_id: &str) -> bool {
        self.mentions
            .as_ref()
            .is_some_and(|mentions| mentions.iter().any(|mention| mention == user_id))
    }

    /// Parsed edit timestamp; `Ok(None)` for messages never edited
    pub fn edited_at(&self) -> ChatResult<Option<DateTime<Utc>>> {
        self.edited.as_ref().map(EditedAt::parse).transpose()
    }
}

impl SendMessageRequest {
    /// Create a request with a fresh nonce
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            nonce: Uuid::new_v4().to_string(),
            attachments: None,
            replies: None,
        }
    }

    /// Attach an uploaded file
    pub fn with_attachment(mut self, file_id: impl Into<String>) -> Self {
        self.attachments.get_or_insert_with(Vec::new).push(file_id.into());
        self
    }

    /// Reply to an existing message
    pub fn with_reply(mut self, message_id: impl Into<MessageId>, mention: bool) -> Self {
        self.replies.get_or_insert_with(Vec::new).push(ReplyIntent {
            id: message_id.into(),
            mention,
        });
        self
    }

    /// Validate the send request
    pub fn validate(&self) -> ChatResult<()> {
        Validator::nonce(&self.nonce)?;
        Validator::message_content(&self.content)?;

        let attachments = self.attachments.as_deref().unwrap_or_default();
        if self.content.trim().is_empty() && attachments.is_empty() {
            return Err(ChatError::validation(
                "Message must have content or at least one attachment",
            ));
        }

        if attachments.len() > Validator::MAX_ATTACHMENTS {
            return Err(ChatError::validation(format!(
                "Too many attachments (max {})",
                Validator::MAX_ATTACHMENTS
            )));
        }

        if attachments.iter().any(|id| id.trim().is_empty()) {
            return Err(ChatError::validation("Attachment id cannot be empty"));
        }

        let replies = self.replies.as_deref().unwrap_or_default();
        if replies.len() > Validator::MAX_REPLIES {
            return Err(ChatError::validation(format!(
                "Too many replies (max {})",
                Validator::MAX_REPLIES
            )));
        }

        for reply in replies {
            Validator::id(&reply.id)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(content: serde_json::Value) -> Message {
        serde_json::from_value(json!({
            "_id": "01FD58YK5W7QRV5H3D64KTQYX3",
            "channel": "c1",
            "author": "u1",
            "content": content
        }))
        .unwrap()
    }

    #[test]
    fn test_plain_text_content() {
        let message = message(json!("hello"));
        assert_eq!(message.text(), Some("hello"));
        assert!(!message.is_system());
        assert!(message.attachments.is_none());
        assert!(message.edited_at().unwrap().is_none());
    }

    #[test]
    fn test_system_message_tags_round_trip() {
        let payloads = [
            json!({ "type": "text", "content": "Welcome!" }),
            json!({ "type": "user_added", "id": "u2", "by": "u1" }),
            json!({ "type": "user_remove", "id": "u2", "by": "u1" }),
            json!({ "type": "user_joined", "id": "u2" }),
            json!({ "type": "user_left", "id": "u2" }),
            json!({ "type": "user_kicked", "id": "u2" }),
            json!({ "type": "user_banned", "id": "u2" }),
            json!({ "type": "channel_renamed", "name": "lobby", "by": "u1" }),
            json!({ "type": "channel_description_changed", "by": "u1" }),
            json!({ "type": "channel_icon_changed", "by": "u1" }),
        ];

        for payload in payloads {
            let system: SystemMessage = serde_json::from_value(payload.clone()).unwrap();
            assert_eq!(payload["type"], system.kind());
            assert_eq!(serde_json::to_value(&system).unwrap(), payload);

            let message = message(payload.clone());
            assert!(message.is_system());
            assert_eq!(serde_json::to_value(&message).unwrap()["content"], payload);
        }
    }

    #[test]
    fn test_malformed_system_message_keeps_cause() {
        let error = serde_json::from_value::<Message>(json!({
            "_id": "m1",
            "channel": "c1",
            "author": "u1",
            "content": { "type": "user_added", "id": "u2" }
        }))
        .unwrap_err();
        assert!(error.to_string().contains("missing field `by`"), "{error}");

        let error = serde_json::from_value::<Message>(json!({
            "_id": "m1",
            "channel": "c1",
            "author": "u1",
            "content": 42
        }))
        .unwrap_err();
        assert!(error.to_string().contains("expected text or a system message"), "{error}");
    }

    #[test]
    fn test_unknown_system_message_is_rejected() {
        let result: Result<Message, _> = serde_json::from_value(json!({
            "_id": "m1",
            "channel": "c1",
            "author": "u1",
            "content": { "type": "user_promoted", "id": "u2" }
        }));
        assert!(result.is_err());

        let result: Result<SystemMessage, _> =
            serde_json::from_value(json!({ "type": "UserJoined", "id": "u2" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_actor_and_subject() {
        let added = SystemMessage::UserAdded {
            id: "u2".to_string(),
            by: "u1".to_string(),
        };
        assert_eq!(added.actor(), Some("u1"));
        assert_eq!(added.subject(), Some("u2"));

        let joined = SystemMessage::UserJoined { id: "u3".to_string() };
        assert_eq!(joined.actor(), Some("u3"));
        assert_eq!(joined.subject(), Some("u3"));

        let kicked = SystemMessage::UserKicked { id: "u4".to_string() };
        assert_eq!(kicked.actor(), None);

        let renamed = SystemMessage::ChannelRenamed {
            name: "new".to_string(),
            by: "u1".to_string(),
        };
        assert_eq!(renamed.subject(), None);
    }

    #[test]
    fn test_edited_timestamp() {
        let mut message = message(json!("edited"));
        message.edited = Some(EditedAt {
            date: "2021-08-13T12:00:00.000Z".to_string(),
        });

        let edited = message.edited_at().unwrap().unwrap();
        assert_eq!(edited.to_rfc3339(), "2021-08-13T12:00:00+00:00");
        assert_eq!(
            serde_json::to_value(&message).unwrap()["edited"],
            json!({ "$date": "2021-08-13T12:00:00.000Z" })
        );

        message.edited = Some(EditedAt {
            date: "yesterday".to_string(),
        });
        assert!(matches!(message.edited_at(), Err(ChatError::Timestamp(_))));
    }

    #[test]
    fn test_mentions() {
        let mut message = message(json!("hi <@u2>"));
        assert!(!message.mentions_user("u2"));

        message.mentions = Some(vec!["u2".to_string()]);
        assert!(message.mentions_user("u2"));
        assert!(!message.mentions_user("u3"));
    }

    #[test]
    fn test_empty_sequences_stay_distinct_from_absent() {
        let message: Message = serde_json::from_value(json!({
            "_id": "m1",
            "channel": "c1",
            "author": "u1",
            "content": "",
            "mentions": []
        }))
        .unwrap();

        assert_eq!(message.mentions, Some(vec![]));
        assert!(message.replies.is_none());
        let encoded = serde_json::to_value(&message).unwrap();
        assert_eq!(encoded["mentions"], json!([]));
        assert!(encoded.get("replies").is_none());
    }

    #[test]
    fn test_send_message_request() {
        let request = SendMessageRequest::new("hello")
            .with_reply("01FD58YK5W7QRV5H3D64KTQYX3", true);
        assert!(request.validate().is_ok());
        assert!(Uuid::parse_str(&request.nonce).is_ok());
        assert_ne!(request.nonce, SendMessageRequest::new("hello").nonce);

        let empty = SendMessageRequest::new("  ");
        assert!(empty.validate().is_err());
        assert!(empty.clone().with_attachment("file").validate().is_ok());

        let too_long = SendMessageRequest::new("a".repeat(2001));
        assert!(too_long.validate().is_err());

        let bad_reply = SendMessageRequest::new("hi").with_reply("nope", false);
        assert!(bad_reply.validate().is_err());

        let many = (0..6).fold(SendMessageRequest::new(""), |request, i| {
            request.with_attachment(format!("file{i}"))
        });
        assert!(many.validate().is_err());
    }

    #[test]
    fn test_send_message_request_wire_shape() {
        let mut request = SendMessageRequest::new("hi").with_reply("01FD58YK5W7QRV5H3D64KTQYX3", false);
        request.nonce = "n1".to_string();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "content": "hi",
                "nonce": "n1",
                "replies": [{ "id": "01FD58YK5W7QRV5H3D64KTQYX3", "mention": false }]
            })
        );
    }
}
