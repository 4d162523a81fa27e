//! Notification error types.

use forum_storage::StorageError;
use thiserror::Error;

/// Errors raised while resolving, composing or dispatching notifications.
///
/// Per-recipient delivery failures are not errors; they are reported in
/// [`DeliveryReport`](crate::DeliveryReport).
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A required input was missing or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A directory or settings lookup failed.
    #[error("lookup failed: {0}")]
    Lookup(#[from] StorageError),

    /// No localized text exists for a template or subject.
    #[error("no text for {page}/{tag}")]
    TemplateNotFound {
        /// Localization page.
        page: String,
        /// Resource tag.
        tag: String,
    },
}

impl NotifyError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates a template not found error.
    #[must_use]
    pub fn template_not_found(page: &str, tag: &str) -> Self {
        Self::TemplateNotFound {
            page: page.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// Result type for notification operations.
pub type NotifyResult<T> = Result<T, NotifyError>;

impl From<NotifyError> for forum_core::Error {
    fn from(err: NotifyError) -> Self {
        match err {
            NotifyError::InvalidArgument(msg) => Self::InvalidArgument(msg),
            NotifyError::Lookup(source) => source.into(),
            NotifyError::TemplateNotFound { .. } => Self::Configuration(err.to_string()),
        }
    }
}
