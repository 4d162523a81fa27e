//! Session error types.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The user name was empty.
    #[error("Session requires a user name")]
    MissingUserName,

    /// Session not found.
    #[error("Session not found: {0}")]
    NotFound(Uuid),

    /// The authority refused to issue a session.
    #[error("Session rejected: {0}")]
    Rejected(String),

    /// Storage error.
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl SessionError {
    /// Checks if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

impl From<SessionError> for forum_core::Error {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::MissingUserName => Self::InvalidArgument(err.to_string()),
            _ => Self::Session(err.to_string()),
        }
    }
}
