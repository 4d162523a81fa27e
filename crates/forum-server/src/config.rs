//! Server configuration.
//!
//! Configuration is loaded from environment variables with sensible defaults.

use forum_core::{BoardDefaults, Config, ProviderCredentials, ServerSettings, SsoConfig};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host to bind to.
    pub host: String,

    /// Server port.
    pub port: u16,

    /// Public base URL (provider callbacks and admin links).
    pub base_url: String,

    /// Board served by this process.
    pub board_id: i32,

    /// Board display name.
    pub board_name: String,

    /// Sender address for notifications.
    pub forum_email: String,

    /// Semicolon-delimited addresses notified on registration.
    pub register_notify_list: String,

    /// Identity provider credentials.
    pub sso: SsoConfig,

    /// CORS allowed origins (comma-separated).
    pub cors_origins: Vec<String>,

    /// Log filter.
    pub log_level: String,
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// A `.env` file is read first if present.
    ///
    /// ## Errors
    ///
    /// Returns an error if a provider has a client id but no secret, or the
    /// other way round.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// ## Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = var("FORUM_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("FORUM_PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let base_url = var("FORUM_BASE_URL").unwrap_or_else(|| format!("http://{host}:{port}"));

        let board_id = var("FORUM_BOARD_ID")
            .and_then(|v| v.parse().ok())
            .unwrap_or(1);

        let board_name = var("FORUM_BOARD_NAME").unwrap_or_else(|| "Forum".to_string());
        let forum_email = var("FORUM_EMAIL").unwrap_or_else(|| "forum@localhost".to_string());
        let register_notify_list = var("FORUM_REGISTER_NOTIFY_LIST").unwrap_or_default();

        let sso = SsoConfig {
            twitter: credentials(&var, "TWITTER")?,
            facebook: credentials(&var, "FACEBOOK")?,
            google: credentials(&var, "GOOGLE")?,
        };

        let cors_origins = var("FORUM_CORS_ORIGINS")
            .map(|s| s.split(',').map(str::trim).map(String::from).collect())
            .unwrap_or_else(|| vec!["*".to_string()]);

        let log_level = var("RUST_LOG").unwrap_or_else(|| "info".to_string());

        Ok(Self {
            host,
            port,
            base_url,
            board_id,
            board_name,
            forum_email,
            register_notify_list,
            sso,
            cors_origins,
            log_level,
        })
    }

    /// Creates a configuration for testing.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0, // Random port
            base_url: "http://localhost:8080".to_string(),
            board_id: 1,
            board_name: "TestForum".to_string(),
            forum_email: "forum@example.com".to_string(),
            register_notify_list: String::new(),
            sso: SsoConfig::default(),
            cors_origins: vec!["*".to_string()],
            log_level: "debug".to_string(),
        }
    }

    /// Returns the shared configuration handed to library crates.
    #[must_use]
    pub fn core(&self) -> Config {
        Config {
            server: ServerSettings {
                host: self.host.clone(),
                port: self.port,
                base_url: self.base_url.clone(),
            },
            sso: self.sso.clone(),
            board: BoardDefaults {
                board_id: self.board_id,
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            board_id: 1,
            board_name: "Forum".to_string(),
            forum_email: "forum@localhost".to_string(),
            register_notify_list: String::new(),
            sso: SsoConfig::default(),
            cors_origins: vec!["*".to_string()],
            log_level: "info".to_string(),
        }
    }
}

/// Reads `FORUM_{provider}_CLIENT_ID` / `_CLIENT_SECRET`.
fn credentials(
    var: &impl Fn(&str) -> Option<String>,
    provider: &str,
) -> anyhow::Result<Option<ProviderCredentials>> {
    let id_key = format!("FORUM_{provider}_CLIENT_ID");
    let secret_key = format!("FORUM_{provider}_CLIENT_SECRET");
    let non_blank = |key: &str| var(key).filter(|v| !v.trim().is_empty());

    match (non_blank(&id_key), non_blank(&secret_key)) {
        (Some(id), Some(secret)) => Ok(Some(ProviderCredentials::new(id, secret))),
        (None, None) => Ok(None),
        (Some(_), None) => Err(anyhow::anyhow!("{secret_key} is required when {id_key} is set")),
        (None, Some(_)) => Err(anyhow::anyhow!("{id_key} is required when {secret_key} is set")),
    }
}
