//! Service wiring.
//!
//! Registers the collaborators every component needs. The in-memory stores
//! stand in for the forum's database until a persistent backend is wired.

use std::sync::Arc;

use forum_core::EventBus;
use forum_model::{BoardSettings, DomainEvent};
use forum_notify::{DefaultLocalization, Localization};
use forum_session::{InMemorySessionAuthority, SessionAuthority};
use forum_spi::{ServiceRegistry, ServiceRequirement};
use forum_sso::ProviderRegistry;
use forum_storage::memory::{
    InMemoryBoardSettingsStore, InMemoryGroupDirectory, InMemoryMailStore, InMemorySsoStatusStore,
    InMemoryUserDirectory,
};
use forum_storage::{BoardSettingsStore, GroupDirectory, MailStore, SsoStatusStore, UserDirectory};

use crate::config::ServerConfig;

/// Services [`AppState`](crate::AppState) resolves at startup.
#[must_use]
pub fn required_services() -> Vec<ServiceRequirement> {
    vec![
        ServiceRequirement::of::<ProviderRegistry>(),
        ServiceRequirement::of::<EventBus<DomainEvent>>(),
        ServiceRequirement::of::<dyn SsoStatusStore>(),
        ServiceRequirement::of::<dyn SessionAuthority>(),
        ServiceRequirement::of::<dyn BoardSettingsStore>(),
        ServiceRequirement::of::<dyn GroupDirectory>(),
        ServiceRequirement::of::<dyn MailStore>(),
        ServiceRequirement::of::<dyn Localization>(),
    ]
}

/// Builds a registry holding the default, in-process services.
///
/// ## Errors
///
/// Returns an error if the identity provider configuration is unusable.
pub fn default_services(config: &ServerConfig) -> anyhow::Result<ServiceRegistry> {
    let registry = ServiceRegistry::new();

    let providers = ProviderRegistry::from_config(&config.sso, &config.base_url)?;
    registry.register(Arc::new(providers));
    registry.register(Arc::new(EventBus::<DomainEvent>::default()));

    let board = BoardSettings::new(config.board_id, &config.board_name, &config.forum_email)
        .with_register_notification_list(&config.register_notify_list);
    registry.register::<dyn BoardSettingsStore>(Arc::new(InMemoryBoardSettingsStore::with_board(board)));

    registry.register::<dyn UserDirectory>(Arc::new(InMemoryUserDirectory::new()));
    registry.register::<dyn GroupDirectory>(Arc::new(InMemoryGroupDirectory::new()));
    registry.register::<dyn SsoStatusStore>(Arc::new(InMemorySsoStatusStore::new()));
    registry.register::<dyn MailStore>(Arc::new(InMemoryMailStore::new()));
    registry.register::<dyn SessionAuthority>(Arc::new(InMemorySessionAuthority::new()));
    registry.register::<dyn Localization>(Arc::new(DefaultLocalization::new()));

    tracing::debug!(services = registry.len(), "default services registered");
    Ok(registry)
}
