//! # forum-server
//!
//! Composition root for forum single sign-on.
//!
//! This crate wires the library crates together:
//! - environment configuration ([`ServerConfig`])
//! - default services registered in a [`ServiceRegistry`](forum_spi::ServiceRegistry)
//! - [`AppState`] assembled from that registry
//! - the HTTP surface: login URL generation and health probes
//! - the login audit subscriber
//!
//! ## Usage
//!
//! ```ignore
//! use forum_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! Server::new(config)?.run().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
pub mod config;
pub mod providers;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use router::create_router;
pub use state::AppState;

use std::net::SocketAddr;

use axum::Router;
use forum_spi::ServiceRegistry;
use tokio::net::TcpListener;

/// The forum single sign-on server.
pub struct Server {
    config: ServerConfig,
    services: ServiceRegistry,
}

impl Server {
    /// Creates a server backed by the default services.
    ///
    /// ## Errors
    ///
    /// Returns an error if the identity provider configuration is unusable.
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let services = providers::default_services(&config)?;
        Ok(Self::with_services(config, services))
    }

    /// Creates a server backed by caller-supplied services.
    #[must_use]
    pub const fn with_services(config: ServerConfig, services: ServiceRegistry) -> Self {
        Self { config, services }
    }

    /// Runs the server.
    ///
    /// This starts the HTTP server and blocks until it receives a shutdown signal.
    ///
    /// ## Errors
    ///
    /// Returns an error if a required service is missing or the listener
    /// cannot be bound.
    pub async fn run(self) -> anyhow::Result<()> {
        let state = AppState::from_registry(self.config.clone(), &self.services)?;
        let audit = audit::spawn_login_audit(&state.events);

        tracing::info!(
            providers = ?state.dispatcher.registry().kinds(),
            board_id = self.config.board_id,
            "forum services ready"
        );

        let app = create_router(state);

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        audit.abort();
        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Creates a test router without starting the server.
    ///
    /// ## Errors
    ///
    /// Returns an error if a required service is missing.
    pub fn test_router(&self) -> anyhow::Result<Router> {
        let state = AppState::from_registry(self.config.clone(), &self.services)?;
        Ok(create_router(state))
    }
}

/// Waits for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
