//! # forum-integration-tests
//!
//! Shared fixtures for the end-to-end tests: an [`AppState`] wired over
//! in-memory collaborators, with handles kept so tests can inspect what the
//! pipeline wrote.

#![forbid(unsafe_code)]

use std::sync::Arc;

use axum::Router;
use forum_core::{EventBus, ProviderCredentials, SsoConfig};
use forum_model::{BoardSettings, DomainEvent, Group};
use forum_server::{create_router, AppState, ServerConfig};
use forum_session::{InMemorySessionAuthority, SessionAuthority};
use forum_spi::ServiceRegistry;
use forum_sso::ProviderRegistry;
use forum_storage::memory::{
    InMemoryBoardSettingsStore, InMemoryGroupDirectory, InMemoryMailStore, InMemorySsoStatusStore,
};
use forum_notify::{DefaultLocalization, Localization};
use forum_storage::{BoardSettingsStore, GroupDirectory, MailStore, SsoStatusStore};

/// Board used by every test.
pub const BOARD_ID: i32 = 1;

/// Test environment holding the application state and handles to the
/// in-memory stores behind it.
pub struct TestEnv {
    /// Assembled application state.
    pub state: AppState,
    /// SSO flags.
    pub statuses: Arc<InMemorySsoStatusStore>,
    /// Sessions.
    pub sessions: Arc<InMemorySessionAuthority>,
    /// Board groups.
    pub groups: Arc<InMemoryGroupDirectory>,
    /// Outbound mail.
    pub mail: Arc<InMemoryMailStore>,
}

impl TestEnv {
    /// Creates an environment with every provider configured.
    ///
    /// ## Errors
    ///
    /// Returns an error if the services cannot be assembled.
    pub fn new(register_notify_list: &str) -> anyhow::Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("forum_sso=debug,forum_notify=debug,forum_server=debug")
            .with_test_writer()
            .try_init();

        let mut config = ServerConfig::for_testing();
        config.base_url = "https://forum.example.com".to_string();
        config.register_notify_list = register_notify_list.to_string();
        config.sso = SsoConfig {
            twitter: Some(ProviderCredentials::new("twitter-key", "twitter-secret")),
            facebook: Some(ProviderCredentials::new("facebook-app", "facebook-secret")),
            google: Some(ProviderCredentials::new("google-client", "google-secret")),
        };

        let statuses = Arc::new(InMemorySsoStatusStore::new());
        let sessions = Arc::new(InMemorySessionAuthority::new());
        let groups = Arc::new(InMemoryGroupDirectory::new());
        let mail = Arc::new(InMemoryMailStore::new());
        let board = BoardSettings::new(BOARD_ID, &config.board_name, &config.forum_email)
            .with_register_notification_list(&config.register_notify_list);

        let registry = ServiceRegistry::new();
        registry.register(Arc::new(ProviderRegistry::from_config(
            &config.sso,
            &config.base_url,
        )?));
        registry.register(Arc::new(EventBus::<DomainEvent>::default()));
        registry.register::<dyn SsoStatusStore>(statuses.clone());
        registry.register::<dyn SessionAuthority>(sessions.clone());
        registry.register::<dyn BoardSettingsStore>(Arc::new(InMemoryBoardSettingsStore::with_board(board)));
        registry.register::<dyn GroupDirectory>(groups.clone());
        registry.register::<dyn MailStore>(mail.clone());
        registry.register::<dyn Localization>(Arc::new(DefaultLocalization::new()));

        let state = AppState::from_registry(config, &registry)?;

        Ok(Self {
            state,
            statuses,
            sessions,
            groups,
            mail,
        })
    }

    /// Adds a group with members to the test board.
    pub fn add_group(&self, group_id: i32, name: &str, members: &[&str]) {
        self.groups.add_group(BOARD_ID, Group::new(group_id, name));
        for member in members {
            self.groups.add_member_email(BOARD_ID, group_id, *member);
        }
    }

    /// Returns the HTTP router over this environment.
    #[must_use]
    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }
}
