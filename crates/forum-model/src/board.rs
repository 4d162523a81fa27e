//! Per-board settings consumed by the notification pipeline.

use serde::{Deserialize, Serialize};

/// Board settings read from the board configuration store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Board identifier.
    pub board_id: i32,
    /// Display name, substituted for `{forumname}` and into subjects.
    pub name: String,
    /// Sender address for outbound notifications.
    pub forum_email: String,
    /// Semicolon-delimited list of addresses notified on registration.
    pub notification_on_user_register_email_list: String,
}

impl BoardSettings {
    /// Creates settings with an empty registration notification list.
    #[must_use]
    pub fn new(board_id: i32, name: impl Into<String>, forum_email: impl Into<String>) -> Self {
        Self {
            board_id,
            name: name.into(),
            forum_email: forum_email.into(),
            notification_on_user_register_email_list: String::new(),
        }
    }

    /// Sets the registration notification list.
    #[must_use]
    pub fn with_register_notification_list(mut self, list: impl Into<String>) -> Self {
        self.notification_on_user_register_email_list = list.into();
        self
    }
}
