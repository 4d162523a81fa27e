//! Service registry wiring.

use std::sync::Arc;

use forum_model::MailMessage;
use forum_server::providers::{default_services, required_services};
use forum_server::{AppState, Server, ServerConfig};
use forum_spi::ServiceRegistry;
use forum_storage::memory::InMemoryMailStore;
use forum_storage::MailStore;

/// Named registrations resolve by name and never fall back.
#[tokio::test]
async fn test_named_resolution_honours_the_name() -> anyhow::Result<()> {
    let registry = ServiceRegistry::new();
    let default_store = Arc::new(InMemoryMailStore::new());
    let bulk_store = Arc::new(InMemoryMailStore::new());

    registry.register::<dyn MailStore>(default_store.clone());
    registry.register_named::<dyn MailStore>("bulk", bulk_store.clone())?;

    let resolved = registry
        .try_resolve_named::<dyn MailStore>("bulk")
        .ok_or_else(|| anyhow::anyhow!("bulk store should resolve"))?;
    resolved
        .enqueue(MailMessage::new("forum@example.com", "a@example.com", "s", "b"))
        .await?;

    assert_eq!(bulk_store.messages().len(), 1);
    assert!(default_store.messages().is_empty());

    assert!(registry.try_resolve_named::<dyn MailStore>("archive").is_none());
    Ok(())
}

/// The server's default services satisfy what the state needs.
#[test]
fn test_default_services_assemble() -> anyhow::Result<()> {
    let config = ServerConfig::for_testing();
    let registry = default_services(&config)?;

    registry.validate_required(&required_services())?;
    AppState::from_registry(config.clone(), &registry)?;
    Server::new(config)?.test_router()?;
    Ok(())
}

/// A missing collaborator fails assembly instead of degrading.
#[test]
fn test_missing_service_fails_fast() {
    let config = ServerConfig::for_testing();
    let registry = ServiceRegistry::new();

    assert!(AppState::from_registry(config.clone(), &registry).is_err());
    assert!(Server::with_services(config, registry).test_router().is_err());
}
