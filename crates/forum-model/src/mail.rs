//! Outbound mail records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message queued in the outbound mail store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    /// Queue entry identifier.
    pub id: Uuid,
    /// Sender address.
    pub from: String,
    /// Single recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// When the message was queued.
    pub queued_at: DateTime<Utc>,
}

impl MailMessage {
    /// Creates a message stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            from: from.into(),
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            queued_at: Utc::now(),
        }
    }
}
