//! # forum-core
//!
//! Core utilities, configuration, and error handling for the forum
//! single sign-on pipeline.
//!
//! This crate provides foundational types used by every other `forum-*`
//! crate: the shared error taxonomy, application configuration, and the
//! process-wide event bus.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod event;

pub use config::{BoardDefaults, Config, ProviderCredentials, ServerSettings, SsoConfig};
pub use error::{Error, Result};
pub use event::EventBus;
