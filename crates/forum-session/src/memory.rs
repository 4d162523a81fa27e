//! In-memory session authority.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::authority::SessionAuthority;
use crate::error::{SessionError, SessionResult};
use crate::session::{SessionLifetime, UserSession};

/// Session authority keeping sessions in process memory.
#[derive(Debug, Default)]
pub struct InMemorySessionAuthority {
    sessions: RwLock<HashMap<Uuid, UserSession>>,
}

impl InMemorySessionAuthority {
    /// Creates an empty authority.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets a session by id.
    ///
    /// ## Errors
    ///
    /// Returns `SessionError::NotFound` if the session doesn't exist.
    pub fn get(&self, id: Uuid) -> SessionResult<UserSession> {
        self.sessions
            .read()
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))
    }

    /// Returns all sessions for a user that have not expired.
    #[must_use]
    pub fn active_sessions_for(&self, user_name: &str) -> Vec<UserSession> {
        self.sessions
            .read()
            .values()
            .filter(|s| s.user_name == user_name && !s.is_expired())
            .cloned()
            .collect()
    }

    /// Returns the number of stored sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Returns whether no sessions are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[async_trait]
impl SessionAuthority for InMemorySessionAuthority {
    async fn establish_session(
        &self,
        user_name: &str,
        persistent: bool,
    ) -> SessionResult<UserSession> {
        if user_name.trim().is_empty() {
            return Err(SessionError::MissingUserName);
        }

        let session = UserSession::new(user_name, SessionLifetime::from_persistent(persistent));
        self.sessions.write().insert(session.id, session.clone());

        tracing::debug!(session_id = %session.id, user = user_name, persistent, "session established");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn establishes_and_retrieves_sessions() {
        let authority = InMemorySessionAuthority::new();
        let session = authority.establish_session("alice", true).await.unwrap();

        assert_eq!(authority.get(session.id).unwrap(), session);
        assert_eq!(authority.active_sessions_for("alice").len(), 1);
        assert!(authority.active_sessions_for("bob").is_empty());
    }

    #[tokio::test]
    async fn rejects_blank_user_names() {
        let authority = InMemorySessionAuthority::new();
        let result = authority.establish_session("  ", true).await;

        assert!(matches!(result, Err(SessionError::MissingUserName)));
        assert!(authority.is_empty());
    }

    #[test]
    fn missing_session_is_not_found() {
        let authority = InMemorySessionAuthority::new();
        assert!(authority.get(Uuid::now_v7()).unwrap_err().is_not_found());
    }
}
