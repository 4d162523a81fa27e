//! Domain events published on the event bus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::provider::IdentityProviderKind;

/// A user completed an external sign-in and now has a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoLoginEvent {
    /// Unique event identifier.
    pub id: Uuid,
    /// User who signed in.
    pub user_id: i32,
    /// Provider the sign-in came through, when known.
    pub occurred_via_provider: Option<IdentityProviderKind>,
    /// When the event was created.
    pub occurred_at: DateTime<Utc>,
}

impl SsoLoginEvent {
    /// Creates an event for `user_id`.
    #[must_use]
    pub fn new(user_id: i32, provider: Option<IdentityProviderKind>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            occurred_via_provider: provider,
            occurred_at: Utc::now(),
        }
    }
}

/// Events carried by the process-wide event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    /// Successful single sign-on login.
    SsoLogin(SsoLoginEvent),
}

impl From<SsoLoginEvent> for DomainEvent {
    fn from(event: SsoLoginEvent) -> Self {
        Self::SsoLogin(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_type_tag() {
        let event = DomainEvent::from(SsoLoginEvent::new(42, Some(IdentityProviderKind::Google)));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "SSO_LOGIN");
        assert_eq!(json["user_id"], 42);
        assert_eq!(json["occurred_via_provider"], "google");
    }

    #[test]
    fn events_get_distinct_ids() {
        let a = SsoLoginEvent::new(1, None);
        let b = SsoLoginEvent::new(1, None);
        assert_ne!(a.id, b.id);
    }
}
