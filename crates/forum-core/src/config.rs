//! Configuration for the forum single sign-on pipeline.
//!
//! The structures here are plain data; `forum-server` fills them from the
//! environment and hands the relevant pieces to each component.

use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    pub server: ServerSettings,
    /// External identity provider credentials.
    pub sso: SsoConfig,
    /// Board defaults.
    pub board: BoardDefaults,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Public base URL, used for provider callbacks and admin links.
    pub base_url: String,
}

/// Client credentials issued by an identity provider.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderCredentials {
    /// Client (consumer) identifier.
    pub client_id: String,
    /// Client (consumer) secret.
    pub client_secret: String,
}

impl ProviderCredentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Identity provider configuration.
///
/// A provider without credentials is not registered, so login URLs for it
/// degrade to the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SsoConfig {
    /// Twitter consumer key and secret.
    pub twitter: Option<ProviderCredentials>,
    /// Facebook application id and secret.
    pub facebook: Option<ProviderCredentials>,
    /// Google OAuth client id and secret.
    pub google: Option<ProviderCredentials>,
}

impl SsoConfig {
    /// Returns whether at least one provider is configured.
    #[must_use]
    pub const fn any_configured(&self) -> bool {
        self.twitter.is_some() || self.facebook.is_some() || self.google.is_some()
    }
}

/// Board defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDefaults {
    /// Board served by this process.
    pub board_id: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8080,
                base_url: "http://localhost:8080".to_string(),
            },
            sso: SsoConfig::default(),
            board: BoardDefaults { board_id: 1 },
        }
    }
}
