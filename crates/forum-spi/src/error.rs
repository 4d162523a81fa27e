//! Error type for service resolution.

use thiserror::Error;

/// Error type for registry operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpiError {
    /// No service is registered for the requested type.
    #[error("service not registered: {0}")]
    ServiceNotFound(String),

    /// No service is registered for the requested type under this name.
    #[error("named service not registered: {service} ({name})")]
    NamedServiceNotFound {
        /// Requested service type.
        service: String,
        /// Requested name.
        name: String,
    },

    /// A service name was empty.
    #[error("service name must not be empty")]
    EmptyName,
}

/// Result type for registry operations.
pub type SpiResult<T> = Result<T, SpiError>;

impl From<SpiError> for forum_core::Error {
    fn from(err: SpiError) -> Self {
        match err {
            SpiError::EmptyName => Self::InvalidArgument(err.to_string()),
            SpiError::ServiceNotFound(_) | SpiError::NamedServiceNotFound { .. } => {
                Self::UnresolvedDependency(err.to_string())
            }
        }
    }
}
