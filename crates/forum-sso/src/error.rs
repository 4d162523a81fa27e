//! Single sign-on error types.

use forum_session::SessionError;
use forum_storage::StorageError;
use thiserror::Error;

/// Errors raised by login dispatch and the post-login transition.
///
/// An unknown provider is deliberately absent: it degrades to an empty
/// login URL instead of failing.
#[derive(Debug, Error)]
pub enum SsoError {
    /// A required input was missing or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Provider configuration could not be used.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The SSO flag could not be written.
    #[error("failed to persist single sign-on status: {0}")]
    Persistence(#[source] StorageError),

    /// The session could not be established.
    #[error("failed to establish session: {0}")]
    Session(#[source] SessionError),
}

impl SsoError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Result type for single sign-on operations.
pub type SsoResult<T> = Result<T, SsoError>;

impl From<SsoError> for forum_core::Error {
    fn from(err: SsoError) -> Self {
        match err {
            SsoError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            SsoError::Configuration(msg) => Self::Configuration(msg),
            SsoError::Persistence(source) => Self::Persistence(source.to_string()),
            SsoError::Session(source) => Self::Session(source.to_string()),
        }
    }
}
