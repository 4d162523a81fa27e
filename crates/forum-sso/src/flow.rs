//! Login attempt state machine.
//!
//! Type-safe lifecycle of one external login attempt. Each transition
//! consumes the attempt, so a callback cannot be completed twice and a URL
//! cannot be issued for an attempt that already finished.

use std::marker::PhantomData;

use forum_model::{IdentityProviderKind, SsoLoginEvent};
use forum_session::UserSession;
use uuid::Uuid;

use crate::dispatcher::LoginDispatcher;
use crate::error::SsoResult;
use crate::outcome::{LoginOutcome, LoginOutcomeHandler};
use crate::provider::LoginRequestContext;

/// Login attempt states.
pub mod states {
    /// Attempt created, no URL issued yet.
    #[derive(Debug, Clone, Copy)]
    pub struct Unauthenticated;

    /// The provider's login URL was handed to the browser.
    #[derive(Debug, Clone, Copy)]
    pub struct LoginUrlIssued;

    /// The browser went to the provider; waiting for its callback.
    #[derive(Debug, Clone, Copy)]
    pub struct CallbackPending;

    /// Session established and login event published.
    #[derive(Debug, Clone, Copy)]
    pub struct EventPublished;

    /// Identity linked to an existing user, no session started.
    #[derive(Debug, Clone, Copy)]
    pub struct LinkedWithoutSession;
}

/// One external login attempt in state `S`.
#[derive(Debug)]
pub struct LoginAttempt<S> {
    /// Attempt identifier, for log correlation.
    pub attempt_id: Uuid,
    request: LoginRequestContext,
    login_url: Option<String>,
    session: Option<UserSession>,
    event: Option<SsoLoginEvent>,
    user_id: Option<i32>,
    _state: PhantomData<S>,
}

impl<S> LoginAttempt<S> {
    /// Returns the request this attempt was created from.
    #[must_use]
    pub const fn request(&self) -> &LoginRequestContext {
        &self.request
    }

    /// Returns the provider of this attempt.
    #[must_use]
    pub const fn provider(&self) -> IdentityProviderKind {
        self.request.provider
    }

    fn transition<T>(self) -> LoginAttempt<T> {
        LoginAttempt {
            attempt_id: self.attempt_id,
            request: self.request,
            login_url: self.login_url,
            session: self.session,
            event: self.event,
            user_id: self.user_id,
            _state: PhantomData,
        }
    }
}

impl LoginAttempt<states::Unauthenticated> {
    /// Starts an attempt for `request`.
    #[must_use]
    pub fn new(request: LoginRequestContext) -> Self {
        Self {
            attempt_id: Uuid::now_v7(),
            request,
            login_url: None,
            session: None,
            event: None,
            user_id: None,
            _state: PhantomData,
        }
    }

    /// Issues the provider login URL.
    ///
    /// Returns `None` if the provider is unavailable; the attempt ends
    /// there.
    #[must_use]
    pub fn issue_url(self, dispatcher: &LoginDispatcher) -> Option<LoginAttempt<states::LoginUrlIssued>> {
        let url = dispatcher.generate_login_url_for(&self.request);
        if url.is_empty() {
            tracing::debug!(attempt_id = %self.attempt_id, provider = %self.provider(), "login attempt abandoned");
            return None;
        }
        let mut next = self.transition::<states::LoginUrlIssued>();
        next.login_url = Some(url);
        Some(next)
    }
}

impl LoginAttempt<states::LoginUrlIssued> {
    /// Returns the issued URL.
    #[must_use]
    pub fn login_url(&self) -> &str {
        self.login_url.as_deref().unwrap_or_default()
    }

    /// The browser followed the URL.
    #[must_use]
    pub fn redirected(self) -> LoginAttempt<states::CallbackPending> {
        self.transition()
    }
}

/// Terminal states of a completed attempt.
#[derive(Debug)]
pub enum CompletedLogin {
    /// Session established and event published.
    SignedIn(LoginAttempt<states::EventPublished>),
    /// Identity linked without a session.
    Linked(LoginAttempt<states::LinkedWithoutSession>),
}

impl LoginAttempt<states::CallbackPending> {
    /// Completes the attempt once the provider has authenticated the user.
    ///
    /// A request to connect to the current user links the identity without
    /// starting a session; any other request signs the user in.
    ///
    /// ## Errors
    ///
    /// Propagates errors from [`LoginOutcomeHandler::on_login_success`].
    pub async fn complete(
        self,
        handler: &LoginOutcomeHandler,
        user_name: &str,
        user_id: i32,
    ) -> SsoResult<CompletedLogin> {
        let establish_session = !self.request.connect_to_existing_user;
        let outcome = handler
            .on_login_success(self.provider(), user_name, user_id, establish_session)
            .await?;

        let mut attempt = self;
        attempt.user_id = Some(user_id);

        Ok(match outcome {
            LoginOutcome::SignedIn { session, event, .. } => {
                attempt.session = Some(session);
                attempt.event = Some(event);
                CompletedLogin::SignedIn(attempt.transition())
            }
            LoginOutcome::LinkedWithoutSession { .. } => CompletedLogin::Linked(attempt.transition()),
        })
    }
}

impl LoginAttempt<states::EventPublished> {
    /// Returns the established session.
    #[must_use]
    pub const fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    /// Returns the published event.
    #[must_use]
    pub const fn event(&self) -> Option<&SsoLoginEvent> {
        self.event.as_ref()
    }
}

impl LoginAttempt<states::LinkedWithoutSession> {
    /// Returns the linked user.
    #[must_use]
    pub const fn user_id(&self) -> Option<i32> {
        self.user_id
    }
}
