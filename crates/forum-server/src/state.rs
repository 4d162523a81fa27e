//! Application state management.
//!
//! This module defines the shared state that is passed to all request handlers.

use std::sync::Arc;

use forum_core::EventBus;
use forum_model::DomainEvent;
use forum_notify::{
    AdminLinkBuilder, AdminNotifier, Localization, NotificationComposer, NotificationDispatcher,
    RecipientResolver,
};
use forum_session::SessionAuthority;
use forum_spi::ServiceRegistry;
use forum_sso::{LoginDispatcher, LoginOutcomeHandler, ProviderRegistry};
use forum_storage::{BoardSettingsStore, GroupDirectory, MailStore, SsoStatusStore};

use crate::config::ServerConfig;
use crate::providers::required_services;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,

    /// Login URL dispatch.
    pub dispatcher: LoginDispatcher,

    /// Post-login transition.
    pub outcomes: LoginOutcomeHandler,

    /// Administrator notifications.
    pub notifier: AdminNotifier,

    /// Process-wide event bus.
    pub events: EventBus<DomainEvent>,
}

impl AppState {
    /// Assembles the state from the services in `registry`.
    ///
    /// The registry is consulted only here; components receive their
    /// collaborators through their constructors.
    ///
    /// ## Errors
    ///
    /// Returns an error naming the first service that is not registered.
    pub fn from_registry(config: ServerConfig, registry: &ServiceRegistry) -> anyhow::Result<Self> {
        registry.validate_required(&required_services())?;

        let events = registry.resolve::<EventBus<DomainEvent>>()?.as_ref().clone();
        let dispatcher = LoginDispatcher::new(registry.resolve::<ProviderRegistry>()?);
        let outcomes = LoginOutcomeHandler::new(
            registry.resolve::<dyn SsoStatusStore>()?,
            registry.resolve::<dyn SessionAuthority>()?,
            events.clone(),
        );

        let boards = registry.resolve::<dyn BoardSettingsStore>()?;
        let notifier = AdminNotifier::new(
            Arc::clone(&boards),
            RecipientResolver::new(boards, registry.resolve::<dyn GroupDirectory>()?),
            NotificationComposer::new(registry.resolve::<dyn Localization>()?),
            NotificationDispatcher::new(registry.resolve::<dyn MailStore>()?),
            AdminLinkBuilder::new(&config.base_url),
        );

        Ok(Self {
            config,
            dispatcher,
            outcomes,
            notifier,
            events,
        })
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }
}
