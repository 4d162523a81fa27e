//! # forum-storage
//!
//! Storage abstraction traits for the collaborators the single sign-on and
//! notification pipeline consumes.
//!
//! ## Provider Traits
//!
//! - [`UserDirectory`] - read-only user lookups
//! - [`BoardSettingsStore`] - read-only board configuration
//! - [`GroupDirectory`] - board groups and their member addresses
//! - [`SsoStatusStore`] - which provider a user last signed in through
//! - [`MailStore`] - durable outbound mail queue
//!
//! The [`memory`] module provides in-process implementations of every trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod board;
pub mod error;
pub mod group;
pub mod mail;
pub mod memory;
pub mod sso_status;
pub mod user;

pub use board::BoardSettingsStore;
pub use error::{StorageError, StorageResult};
pub use group::GroupDirectory;
pub use mail::MailStore;
pub use sso_status::SsoStatusStore;
pub use user::UserDirectory;
