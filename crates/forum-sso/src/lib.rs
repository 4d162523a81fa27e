//! # forum-sso
//!
//! Federated login for the forum: routes a login attempt to the right
//! external identity provider and performs the state transition once the
//! provider calls back.
//!
//! ## Components
//!
//! - [`LoginUrlProvider`] - one implementation per identity provider
//! - [`ProviderRegistry`] - maps a provider kind to its implementation
//! - [`LoginDispatcher`] - public entry point producing login URLs
//! - [`LoginOutcomeHandler`] - persists the SSO flag, establishes the
//!   session and publishes the login event
//! - [`LoginAttempt`] - type-safe state machine for a single attempt
//!
//! ## Example
//!
//! ```ignore
//! use forum_sso::{LoginDispatcher, ProviderRegistry};
//! use forum_model::IdentityProviderKind;
//!
//! let registry = ProviderRegistry::from_config(&config.sso, &config.server.base_url)?;
//! let dispatcher = LoginDispatcher::new(Arc::new(registry));
//! let url = dispatcher.generate_login_url(IdentityProviderKind::Google, false, false);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod callback;
pub mod dispatcher;
pub mod error;
pub mod flow;
pub mod outcome;
pub mod provider;
pub mod providers;
pub mod registry;

pub use callback::CallbackBase;
pub use dispatcher::LoginDispatcher;
pub use error::{SsoError, SsoResult};
pub use flow::{states, CompletedLogin, LoginAttempt};
pub use outcome::{LoginOutcome, LoginOutcomeHandler};
pub use provider::{LoginRequestContext, LoginUrlProvider};
pub use providers::{FacebookProvider, GoogleProvider, TwitterProvider};
pub use registry::ProviderRegistry;
