//! # forum-notify
//!
//! Templated administrator notifications.
//!
//! A notification flows through three stages:
//!
//! 1. [`RecipientResolver`] builds a fresh [`RecipientSet`] from the board
//!    configuration or the administrators group.
//! 2. [`NotificationComposer`] renders a [`NotificationTemplate`] into a
//!    subject and body using a [`Localization`] source.
//! 3. [`NotificationDispatcher`] enqueues one message per recipient and
//!    reports per-recipient failures in a [`DeliveryReport`].
//!
//! [`AdminNotifier`] runs the two complete flows: the new-registration
//! notice and the spam-bot notice.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod admin;
pub mod composer;
pub mod defaults;
pub mod dispatcher;
pub mod error;
pub mod link;
pub mod localization;
pub mod recipients;
pub mod template;

pub use admin::AdminNotifier;
pub use composer::{ComposedMessage, NotificationComposer};
pub use dispatcher::{DeliveryFailure, DeliveryReport, NotificationDispatcher};
pub use error::{NotifyError, NotifyResult};
pub use link::AdminLinkBuilder;
pub use localization::{DefaultLocalization, Localization};
pub use recipients::{RecipientResolver, RecipientSet};
pub use template::NotificationTemplate;
