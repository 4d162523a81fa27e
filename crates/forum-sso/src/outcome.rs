//! Post-authentication state transition.
//!
//! Runs once a provider has authenticated a user and the forum account has
//! been resolved: record the SSO flag, then either stop (account linking)
//! or establish a session and announce the login.

use std::sync::Arc;

use forum_core::EventBus;
use forum_model::{DomainEvent, IdentityProviderKind, SsoLoginEvent};
use forum_session::{SessionAuthority, UserSession};
use forum_storage::SsoStatusStore;

use crate::error::{SsoError, SsoResult};

/// Result of a successful post-login transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The external identity was linked; no session was started.
    LinkedWithoutSession {
        /// Linked user.
        user_id: i32,
        /// Provider that was linked.
        provider: IdentityProviderKind,
    },
    /// A session exists and the login event was published.
    SignedIn {
        /// The established session.
        session: UserSession,
        /// The published event.
        event: SsoLoginEvent,
        /// Number of subscribers the event reached.
        delivered_to: usize,
    },
}

impl LoginOutcome {
    /// Returns whether a session was established.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn { .. })
    }
}

/// Performs the post-login transition.
#[derive(Clone)]
pub struct LoginOutcomeHandler {
    status_store: Arc<dyn SsoStatusStore>,
    sessions: Arc<dyn SessionAuthority>,
    events: EventBus<DomainEvent>,
}

impl std::fmt::Debug for LoginOutcomeHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginOutcomeHandler")
            .field("subscribers", &self.events.subscriber_count())
            .finish_non_exhaustive()
    }
}

impl LoginOutcomeHandler {
    /// Creates a handler over its three collaborators.
    #[must_use]
    pub fn new(
        status_store: Arc<dyn SsoStatusStore>,
        sessions: Arc<dyn SessionAuthority>,
        events: EventBus<DomainEvent>,
    ) -> Self {
        Self {
            status_store,
            sessions,
            events,
        }
    }

    /// Handles a successful external authentication.
    ///
    /// The SSO flag is always written first. With `establish_session` off
    /// the transition ends there. Otherwise a persistent session is
    /// established and only then is an [`SsoLoginEvent`] published.
    ///
    /// ## Errors
    ///
    /// - `SsoError::InvalidArgument` for a non-positive `user_id`, or a
    ///   blank `user_name` when a session is requested. Nothing is written.
    /// - `SsoError::Persistence` if the flag cannot be written.
    /// - `SsoError::Session` if the session cannot be established. The flag
    ///   stays written and no event is published.
    pub async fn on_login_success(
        &self,
        provider: IdentityProviderKind,
        user_name: &str,
        user_id: i32,
        establish_session: bool,
    ) -> SsoResult<LoginOutcome> {
        if user_id <= 0 {
            return Err(SsoError::invalid_argument(format!(
                "user id must be positive, got {user_id}"
            )));
        }
        if establish_session && user_name.trim().is_empty() {
            return Err(SsoError::invalid_argument("user name is required to sign in"));
        }

        self.status_store
            .update_status(user_id, provider)
            .await
            .map_err(SsoError::Persistence)?;

        if !establish_session {
            tracing::info!(user_id, provider = %provider, "external identity linked");
            return Ok(LoginOutcome::LinkedWithoutSession { user_id, provider });
        }

        let session = self
            .sessions
            .establish_session(user_name, true)
            .await
            .map_err(SsoError::Session)?;

        let event = SsoLoginEvent::new(user_id, Some(provider));
        let delivered_to = self.events.publish(event.clone().into());

        tracing::info!(
            user_id,
            provider = %provider,
            session_id = %session.id,
            delivered_to,
            "user signed in via external provider"
        );

        Ok(LoginOutcome::SignedIn {
            session,
            event,
            delivered_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use forum_session::{InMemorySessionAuthority, SessionError, SessionResult};
    use forum_storage::memory::InMemorySsoStatusStore;
    use forum_storage::{StorageError, StorageResult};
    use parking_lot::Mutex;
    use tokio::sync::broadcast::{self, error::TryRecvError};

    use super::*;

    struct FailingStatusStore;

    #[async_trait]
    impl SsoStatusStore for FailingStatusStore {
        async fn update_status(&self, _: i32, _: IdentityProviderKind) -> StorageResult<()> {
            Err(StorageError::Connection("down".into()))
        }

        async fn get_status(&self, _: i32) -> StorageResult<Option<IdentityProviderKind>> {
            Ok(None)
        }
    }

    struct RejectingAuthority;

    #[async_trait]
    impl SessionAuthority for RejectingAuthority {
        async fn establish_session(&self, _: &str, _: bool) -> SessionResult<UserSession> {
            Err(SessionError::Rejected("account locked".into()))
        }
    }

    /// Records whether any event was visible while the session was created.
    struct ObservingAuthority {
        receiver: Mutex<broadcast::Receiver<DomainEvent>>,
        saw_event_early: Mutex<Option<bool>>,
        inner: InMemorySessionAuthority,
    }

    #[async_trait]
    impl SessionAuthority for ObservingAuthority {
        async fn establish_session(&self, user_name: &str, persistent: bool) -> SessionResult<UserSession> {
            let early = !matches!(self.receiver.lock().try_recv(), Err(TryRecvError::Empty));
            *self.saw_event_early.lock() = Some(early);
            self.inner.establish_session(user_name, persistent).await
        }
    }

    fn handler(
        store: Arc<dyn SsoStatusStore>,
        sessions: Arc<dyn SessionAuthority>,
        bus: &EventBus<DomainEvent>,
    ) -> LoginOutcomeHandler {
        LoginOutcomeHandler::new(store, sessions, bus.clone())
    }

    #[tokio::test]
    async fn link_only_writes_flag_without_session_or_event() {
        let store = Arc::new(InMemorySsoStatusStore::new());
        let sessions = Arc::new(InMemorySessionAuthority::new());
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        let outcome = handler(store.clone(), sessions.clone(), &bus)
            .on_login_success(IdentityProviderKind::Facebook, "bob", 7, false)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            LoginOutcome::LinkedWithoutSession {
                user_id: 7,
                provider: IdentityProviderKind::Facebook
            }
        );
        assert_eq!(
            store.get_status(7).await.unwrap(),
            Some(IdentityProviderKind::Facebook)
        );
        assert!(sessions.is_empty());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn link_only_accepts_blank_user_name() {
        let bus = EventBus::default();
        let outcome = handler(
            Arc::new(InMemorySsoStatusStore::new()),
            Arc::new(InMemorySessionAuthority::new()),
            &bus,
        )
        .on_login_success(IdentityProviderKind::Google, "", 3, false)
        .await
        .unwrap();

        assert!(!outcome.is_signed_in());
    }

    #[tokio::test]
    async fn sign_in_publishes_exactly_one_event_after_the_session() {
        let store = Arc::new(InMemorySsoStatusStore::new());
        let bus = EventBus::default();
        let authority = Arc::new(ObservingAuthority {
            receiver: Mutex::new(bus.subscribe()),
            saw_event_early: Mutex::new(None),
            inner: InMemorySessionAuthority::new(),
        });
        let mut rx = bus.subscribe();

        let outcome = handler(store.clone(), authority.clone(), &bus)
            .on_login_success(IdentityProviderKind::Google, "alice", 42, true)
            .await
            .unwrap();

        assert_eq!(*authority.saw_event_early.lock(), Some(false));

        let LoginOutcome::SignedIn { session, event, .. } = outcome else {
            panic!("expected a signed-in outcome");
        };
        assert_eq!(session.user_name, "alice");
        assert!(session.is_persistent());
        assert_eq!(event.user_id, 42);
        assert_eq!(event.occurred_via_provider, Some(IdentityProviderKind::Google));

        assert_eq!(rx.try_recv().unwrap(), DomainEvent::SsoLogin(event));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
        assert_eq!(
            store.get_status(42).await.unwrap(),
            Some(IdentityProviderKind::Google)
        );
    }

    #[tokio::test]
    async fn sign_in_without_subscribers_still_succeeds() {
        let bus = EventBus::default();
        let outcome = handler(
            Arc::new(InMemorySsoStatusStore::new()),
            Arc::new(InMemorySessionAuthority::new()),
            &bus,
        )
        .on_login_success(IdentityProviderKind::Twitter, "carol", 5, true)
        .await
        .unwrap();

        assert!(matches!(outcome, LoginOutcome::SignedIn { delivered_to: 0, .. }));
    }

    #[tokio::test]
    async fn status_failure_stops_before_session() {
        let sessions = Arc::new(InMemorySessionAuthority::new());
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        let err = handler(Arc::new(FailingStatusStore), sessions.clone(), &bus)
            .on_login_success(IdentityProviderKind::Google, "alice", 1, true)
            .await
            .unwrap_err();

        assert!(matches!(err, SsoError::Persistence(_)));
        assert!(sessions.is_empty());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn session_failure_keeps_flag_and_publishes_nothing() {
        let store = Arc::new(InMemorySsoStatusStore::new());
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        let err = handler(store.clone(), Arc::new(RejectingAuthority), &bus)
            .on_login_success(IdentityProviderKind::Twitter, "alice", 9, true)
            .await
            .unwrap_err();

        assert!(matches!(err, SsoError::Session(_)));
        assert_eq!(
            store.get_status(9).await.unwrap(),
            Some(IdentityProviderKind::Twitter)
        );
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test]
    async fn invalid_inputs_have_no_side_effects() {
        let store = Arc::new(InMemorySsoStatusStore::new());
        let bus = EventBus::default();
        let h = handler(store.clone(), Arc::new(InMemorySessionAuthority::new()), &bus);

        assert!(matches!(
            h.on_login_success(IdentityProviderKind::Google, "alice", 0, true).await,
            Err(SsoError::InvalidArgument(_))
        ));
        assert!(matches!(
            h.on_login_success(IdentityProviderKind::Google, "  ", 4, true).await,
            Err(SsoError::InvalidArgument(_))
        ));
        assert_eq!(store.get_status(4).await.unwrap(), None);
    }
}
