//! Validation utilities.

use crate::types::{ChatError, ChatResult};

/// Validation utilities
pub struct Validator;

impl Validator {
    /// Length of a ULID identifier
    pub const ID_LENGTH: usize = 26;
    /// Maximum characters in a message body
    pub const MAX_CONTENT_LENGTH: usize = 2000;
    /// Maximum attachments on a single message
    pub const MAX_ATTACHMENTS: usize = 5;
    /// Maximum replies on a single message
    pub const MAX_REPLIES: usize = 5;

    /// Validate a ULID identifier (Crockford base32, upper case)
    pub fn id(id: &str) -> ChatResult<()> {
        if id.len() != Self::ID_LENGTH {
            return Err(ChatError::validation(format!(
                "Invalid id length: expected {} characters, got {}",
                Self::ID_LENGTH,
                id.len()
            )));
        }

        if let Some(invalid) = id
            .chars()
            .find(|c| !c.is_ascii_digit() && !(c.is_ascii_uppercase() && !matches!(c, 'I' | 'L' | 'O' | 'U')))
        {
            return Err(ChatError::validation(format!("Invalid character in id: {invalid}")));
        }

        Ok(())
    }

    /// Validate message content
    pub fn message_content(content: &str) -> ChatResult<()> {
        if content.chars().count() > Self::MAX_CONTENT_LENGTH {
            return Err(ChatError::validation(format!(
                "Message content too long (max {} characters)",
                Self::MAX_CONTENT_LENGTH
            )));
        }

        Ok(())
    }

    /// Validate a client generated nonce
    pub fn nonce(nonce: &str) -> ChatResult<()> {
        if nonce.trim().is_empty() {
            return Err(ChatError::validation("Nonce cannot be empty"));
        }

        if nonce.len() > 64 {
            return Err(ChatError::validation("Nonce too long (max 64 characters)"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_validation() {
        assert!(Validator::id("01FBN6YMVMM4ZYD3CAG1CX0Y9P").is_ok());
        assert!(Validator::id("01FBN6YMVMM4ZYD3CAG1CX0Y9").is_err());
        assert!(Validator::id("01fbn6ymvmm4zyd3cag1cx0y9p").is_err());
        assert!(Validator::id("01FBN6YMVMM4ZYD3CAG1CX0YIP").is_err());
    }

    #[test]
    fn test_message_content_validation() {
        assert!(Validator::message_content("").is_ok());
        assert!(Validator::message_content(&"a".repeat(2000)).is_ok());
        assert!(Validator::message_content(&"a".repeat(2001)).is_err());
        assert!(Validator::message_content(&"é".repeat(2000)).is_ok());
    }

    #[test]
    fn test_nonce_validation() {
        assert!(Validator::nonce("abc").is_ok());
        assert!(Validator::nonce(" ").is_err());
        assert!(Validator::nonce(&"n".repeat(65)).is_err());
    }
}
