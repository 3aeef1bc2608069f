//! Decode JSON documents as named entity kinds.
//!
//! Decoding goes through the typed shapes and back, so the canonical output
//! drops anything the schema does not know about. [`Decoded::lossless`]
//! reports whether that happened.

use std::fmt;
use std::str::FromStr;

use parley_chats::{
    Ban, Channel, ChannelUnread, Invite, Member, Message, RetrievedInvite, Server, UserSettings,
};
use parley_config::NodeConfiguration;
use parley_media::{Attachment, Embed};
use parley_users::{Profile, Session, User};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Entity kinds a payload can be decoded as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    Node,
    Session,
    User,
    Profile,
    Attachment,
    Embed,
    Channel,
    Message,
    Server,
    Member,
    Ban,
    Invite,
    RetrievedInvite,
    Unread,
    Settings,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Unknown payload kind: {0}")]
    UnknownKind(String),

    #[error("Input is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("Malformed {kind} payload: {source}")]
    Malformed {
        kind: PayloadKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {kind} payload: {message}")]
    Invalid { kind: PayloadKind, message: String },
}

/// Result of decoding a payload
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub kind: PayloadKind,
    /// Payload re-encoded from the typed shape
    pub canonical: Value,
    /// One line description of the entity
    pub summary: String,
    /// Whether the canonical form equals the input, ignoring `null` members
    pub lossless: bool,
}

impl PayloadKind {
    pub const ALL: [PayloadKind; 15] = [
        PayloadKind::Node,
        PayloadKind::Session,
        PayloadKind::User,
        PayloadKind::Profile,
        PayloadKind::Attachment,
        PayloadKind::Embed,
        PayloadKind::Channel,
        PayloadKind::Message,
        PayloadKind::Server,
        PayloadKind::Member,
        PayloadKind::Ban,
        PayloadKind::Invite,
        PayloadKind::RetrievedInvite,
        PayloadKind::Unread,
        PayloadKind::Settings,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PayloadKind::Node => "node",
            PayloadKind::Session => "session",
            PayloadKind::User => "user",
            PayloadKind::Profile => "profile",
            PayloadKind::Attachment => "attachment",
            PayloadKind::Embed => "embed",
            PayloadKind::Channel => "channel",
            PayloadKind::Message => "message",
            PayloadKind::Server => "server",
            PayloadKind::Member => "member",
            PayloadKind::Ban => "ban",
            PayloadKind::Invite => "invite",
            PayloadKind::RetrievedInvite => "retrieved-invite",
            PayloadKind::Unread => "unread",
            PayloadKind::Settings => "settings",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PayloadKind {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == needle)
            .ok_or_else(|| PayloadError::UnknownKind(s.to_string()))
    }
}

/// Decode a JSON string as the given kind
pub fn decode_str(kind: PayloadKind, input: &str) -> Result<Decoded, PayloadError> {
    let value: Value = serde_json::from_str(input).map_err(PayloadError::Syntax)?;
    decode(kind, value)
}

/// Decode a JSON value as the given kind
pub fn decode(kind: PayloadKind, value: Value) -> Result<Decoded, PayloadError> {
    let (canonical, summary) = match kind {
        PayloadKind::Node => typed(kind, &value, |node: &NodeConfiguration| {
            Ok(format!(
                "node {} (media: {}, unfurl: {}, voice: {})",
                node.revolt,
                enabled(node.media_url().is_some()),
                enabled(node.unfurl_url().is_some()),
                enabled(node.voice_urls().is_some()),
            ))
        })?,
        PayloadKind::Session => typed(kind, &value, |session: &Session| {
            session.validate().map_err(|error| error.to_string())?;
            Ok(format!("session for user {}", session.user_id))
        })?,
        PayloadKind::User => typed(kind, &value, |user: &User| {
            user.validate().map_err(|error| error.to_string())?;
            Ok(format!("user {} ({})", user.username, user.id))
        })?,
        PayloadKind::Profile => typed(kind, &value, |profile: &Profile| {
            Ok(format!(
                "profile (content: {}, background: {})",
                present(profile.content.is_some()),
                present(profile.background.is_some())
            ))
        })?,
        PayloadKind::Attachment => typed(kind, &value, |attachment: &Attachment| {
            attachment.validate().map_err(|error| error.to_string())?;
            Ok(format!(
                "{} attachment {} ({}, {})",
                attachment.metadata.kind(),
                attachment.filename,
                attachment.content_type,
                attachment.formatted_size()
            ))
        })?,
        PayloadKind::Embed => typed(kind, &value, |embed: &Embed| {
            Ok(match embed.url() {
                Some(url) => format!("embed for {url}"),
                None => "empty embed".to_string(),
            })
        })?,
        PayloadKind::Channel => typed(kind, &value, |channel: &Channel| {
            Ok(match channel.name() {
                Some(name) => format!("{} {} #{}", channel.channel_type(), channel.id(), name),
                None => format!("{} {}", channel.channel_type(), channel.id()),
            })
        })?,
        PayloadKind::Message => typed(kind, &value, |message: &Message| {
            Ok(match message.system() {
                Some(system) => format!("system message {} ({})", message.id, system.kind()),
                None => format!("message {} by {}", message.id, message.author),
            })
        })?,
        PayloadKind::Server => typed(kind, &value, |server: &Server| {
            server.validate().map_err(|error| error.to_string())?;
            Ok(format!(
                "server {} ({}) with {} channels",
                server.name,
                server.id,
                server.channels.len()
            ))
        })?,
        PayloadKind::Member => typed(kind, &value, |member: &Member| {
            Ok(format!("member {} of server {}", member.id.user, member.id.server))
        })?,
        PayloadKind::Ban => typed(kind, &value, |ban: &Ban| {
            Ok(format!("ban of {} from server {}", ban.id.user, ban.id.server))
        })?,
        PayloadKind::Invite => typed(kind, &value, |invite: &Invite| {
            Ok(format!("invite {} to channel {}", invite.code(), invite.channel()))
        })?,
        PayloadKind::RetrievedInvite => typed(kind, &value, |invite: &RetrievedInvite| {
            let RetrievedInvite::Server {
                server_name,
                channel_name,
                ..
            } = invite;
            Ok(format!("invite preview for {server_name} #{channel_name}"))
        })?,
        PayloadKind::Unread => typed(kind, &value, |unread: &ChannelUnread| {
            Ok(format!(
                "unread marker for {} in {} ({} mentions)",
                unread.id.user,
                unread.id.channel,
                unread.mention_count()
            ))
        })?,
        PayloadKind::Settings => typed(kind, &value, |settings: &UserSettings| {
            Ok(format!("{} synced settings", settings.len()))
        })?,
    };

    let lossless = canonical == without_nulls(&value);
    if lossless {
        debug!(%kind, %summary, "decoded payload");
    } else {
        warn!(%kind, %summary, "payload carried fields the schema does not know");
    }

    Ok(Decoded {
        kind,
        canonical,
        summary,
        lossless,
    })
}

fn typed<T, F>(kind: PayloadKind, value: &Value, describe: F) -> Result<(Value, String), PayloadError>
where
    T: DeserializeOwned + Serialize,
    F: FnOnce(&T) -> Result<String, String>,
{
    let entity: T = T::deserialize(value).map_err(|source| PayloadError::Malformed { kind, source })?;
    let summary = describe(&entity).map_err(|message| PayloadError::Invalid { kind, message })?;
    let canonical =
        serde_json::to_value(&entity).map_err(|source| PayloadError::Malformed { kind, source })?;
    Ok((canonical, summary))
}

/// Copy of `value` with `null` object members removed; absent and null
/// optional fields decode the same way.
fn without_nulls(value: &Value) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .iter()
                .filter(|(_, member)| !member.is_null())
                .map(|(key, member)| (key.clone(), without_nulls(member)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(without_nulls).collect()),
        other => other.clone(),
    }
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "enabled"
    } else {
        "disabled"
    }
}

fn present(flag: bool) -> &'static str {
    if flag {
        "set"
    } else {
        "unset"
    }
}
