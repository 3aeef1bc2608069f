use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{SessionId, UserError, UserId, UserResult};

/// Credentials held by a logged-in client
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier, absent on sessions restored from older clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SessionId>,
    /// User the session belongs to
    pub user_id: UserId,
    /// Opaque session token
    pub session_token: String,
}

impl Session {
    /// Name of the header carrying the session token
    pub const TOKEN_HEADER: &'static str = "x-session-token";

    /// Create a session record
    pub fn new(user_id: impl Into<UserId>, session_token: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            session_token: session_token.into(),
        }
    }

    /// Header name and value authenticating requests made with this session
    pub fn header(&self) -> (&'static str, &str) {
        (Self::TOKEN_HEADER, &self.session_token)
    }

    /// Validate session data
    pub fn validate(&self) -> UserResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(UserError::InvalidSession("User id cannot be empty".to_string()));
        }

        if self.session_token.trim().is_empty() {
            return Err(UserError::InvalidSession("Session token cannot be empty".to_string()));
        }

        if let Some(id) = &self.id {
            if id.trim().is_empty() {
                return Err(UserError::InvalidSession("Session id cannot be empty".to_string()));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("session_token", &"<redacted>")
            .finish()
    }
}
