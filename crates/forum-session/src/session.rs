//! Authenticated user session model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long a session stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionLifetime {
    /// Browser-scoped session.
    Transient,
    /// Long-lived "remember me" session.
    Persistent,
}

impl SessionLifetime {
    /// Maps the `persistent` flag to a lifetime.
    #[must_use]
    pub const fn from_persistent(persistent: bool) -> Self {
        if persistent {
            Self::Persistent
        } else {
            Self::Transient
        }
    }

    /// Returns the validity window.
    #[must_use]
    pub fn duration(&self) -> Duration {
        match self {
            Self::Transient => Duration::minutes(30),
            Self::Persistent => Duration::days(30),
        }
    }
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    /// Unique session identifier.
    pub id: Uuid,
    /// User the session authenticates.
    pub user_name: String,
    /// Lifetime class.
    pub lifetime: SessionLifetime,
    /// When the session was created.
    pub started_at: DateTime<Utc>,
    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl UserSession {
    /// Creates a session starting now.
    #[must_use]
    pub fn new(user_name: impl Into<String>, lifetime: SessionLifetime) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            user_name: user_name.into(),
            lifetime,
            started_at: now,
            expires_at: now + lifetime.duration(),
        }
    }

    /// Returns whether this is a "remember me" session.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        matches!(self.lifetime, SessionLifetime::Persistent)
    }

    /// Checks if the session has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistent_sessions_outlive_transient_ones() {
        let transient = UserSession::new("alice", SessionLifetime::Transient);
        let persistent = UserSession::new("alice", SessionLifetime::Persistent);

        assert!(persistent.expires_at > transient.expires_at);
        assert!(persistent.is_persistent());
        assert!(!transient.is_persistent());
        assert!(!persistent.is_expired());
    }

    #[test]
    fn lifetime_from_flag() {
        assert_eq!(
            SessionLifetime::from_persistent(true),
            SessionLifetime::Persistent
        );
        assert_eq!(
            SessionLifetime::from_persistent(false),
            SessionLifetime::Transient
        );
    }
}
