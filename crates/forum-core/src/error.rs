//! Error handling for the forum single sign-on pipeline.
//!
//! Every crate in the workspace has its own error enum; all of them convert
//! into [`Error`] so the composition root can report failures uniformly.

use thiserror::Error;

/// Result type alias using the shared error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Shared error taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input was missing or empty. Raised before any side effect.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The dependency resolver could not produce a required service.
    #[error("unresolved dependency: {0}")]
    UnresolvedDependency(String),

    /// A durable write failed.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// An authenticated session could not be established.
    #[error("session failure: {0}")]
    Session(String),

    /// A message could not be handed to the outbound mail store.
    #[error("delivery to {recipient} failed: {reason}")]
    Delivery {
        /// Address that was rejected.
        recipient: String,
        /// Reason reported by the mail store.
        reason: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Resource not found.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Internal error.
    #[error("internal error")]
    Internal,
}

impl Error {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns whether this error should be logged at error level.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(
            self,
            Self::UnresolvedDependency(_)
                | Self::Persistence(_)
                | Self::Session(_)
                | Self::Configuration(_)
                | Self::Internal
        )
    }

    /// Returns whether this error was caused by the caller's input.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::NotFound(_))
    }
}
