//! # forum-model
//!
//! Domain models shared by the single sign-on and notification crates.
//!
//! These are value types: the directories and stores that own the
//! underlying records live in `forum-storage`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod board;
pub mod event;
pub mod group;
pub mod mail;
pub mod provider;
pub mod user;

pub use board::BoardSettings;
pub use event::{DomainEvent, SsoLoginEvent};
pub use group::{AdministratorGroup, Group, ADMINISTRATORS_GROUP_NAME, DEFAULT_ADMIN_GROUP_ID};
pub use mail::MailMessage;
pub use provider::{IdentityProviderKind, UnknownProviderKind};
pub use user::UserIdentity;
