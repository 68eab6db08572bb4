//! Error types for muxml
//!
//! This module defines all error types used throughout the library.
//! The model is a pure transformation over well-formed values, so the
//! error surface is small: invalid-state signals raised at the point of
//! mutation, bad values, and tokens that name no schema enumerator.

use thiserror::Error;

/// Result type alias using the muxml Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for muxml operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A content/attribute combination the schema forbids was requested.
    /// Raised immediately by the mutating call, never deferred to rendering.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Value error (invalid value for a schema type)
    #[error("value error: {0}")]
    Value(String),

    /// A text token that is not a member of a schema enumeration
    #[error("unknown token '{token}' for {vocabulary}")]
    Token {
        /// The offending token text
        token: String,
        /// The enumeration the token was matched against
        vocabulary: &'static str,
    },

    /// Name error (invalid XML name)
    #[error("name error: {0}")]
    Name(String),
}

impl Error {
    /// Shorthand for a [`Error::Token`] from a borrowed token
    pub fn token(token: &str, vocabulary: &'static str) -> Self {
        Error::Token {
            token: token.to_string(),
            vocabulary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_display() {
        let err = Error::token("dashed-dotted", "line-type");
        let msg = format!("{}", err);
        assert!(msg.contains("dashed-dotted"));
        assert!(msg.contains("line-type"));
    }

    #[test]
    fn test_invalid_state_display() {
        let err = Error::InvalidState("senza-misura is set".to_string());
        assert_eq!(format!("{}", err), "invalid state: senza-misura is set");
    }
}
