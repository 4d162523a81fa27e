//! Best-effort notification delivery.

use std::sync::Arc;

use forum_model::MailMessage;
use forum_storage::MailStore;
use serde::Serialize;

use crate::composer::ComposedMessage;
use crate::error::{NotifyError, NotifyResult};
use crate::recipients::RecipientSet;

/// One recipient the mail store refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryFailure {
    /// Rejected address.
    pub recipient: String,
    /// Error reported by the mail store.
    pub reason: String,
}

impl From<DeliveryFailure> for forum_core::Error {
    fn from(failure: DeliveryFailure) -> Self {
        Self::Delivery {
            recipient: failure.recipient,
            reason: failure.reason,
        }
    }
}

/// Outcome of one dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryReport {
    /// Recipients whose message was queued, in order.
    pub enqueued: Vec<String>,
    /// Recipients whose message was rejected, in order.
    pub failed: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    /// Returns whether every recipient was queued.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Returns the number of recipients attempted.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.enqueued.len() + self.failed.len()
    }
}

/// Enqueues one message per recipient.
#[derive(Clone)]
pub struct NotificationDispatcher {
    mail_store: Arc<dyn MailStore>,
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher").finish_non_exhaustive()
    }
}

impl NotificationDispatcher {
    /// Creates a dispatcher writing to `mail_store`.
    #[must_use]
    pub fn new(mail_store: Arc<dyn MailStore>) -> Self {
        Self { mail_store }
    }

    /// Enqueues `subject`/`body` for every recipient, from `sender`.
    ///
    /// A rejected recipient is logged and recorded in the report; the
    /// remaining recipients are still attempted. An empty set does nothing.
    ///
    /// ## Errors
    ///
    /// Returns `NotifyError::InvalidArgument` if `sender` is blank and there
    /// is at least one recipient.
    pub async fn dispatch(
        &self,
        subject: &str,
        body: &str,
        recipients: &RecipientSet,
        sender: &str,
    ) -> NotifyResult<DeliveryReport> {
        let mut report = DeliveryReport::default();
        if recipients.is_empty() {
            tracing::debug!(subject, "no recipients, notification skipped");
            return Ok(report);
        }
        if sender.trim().is_empty() {
            return Err(NotifyError::invalid_argument("sender address is required"));
        }

        for recipient in recipients.iter() {
            let message = MailMessage::new(sender, recipient, subject, body);
            match self.mail_store.enqueue(message).await {
                Ok(()) => report.enqueued.push(recipient.to_string()),
                Err(err) => {
                    tracing::warn!(recipient, error = %err, "failed to enqueue notification");
                    report.failed.push(DeliveryFailure {
                        recipient: recipient.to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            subject,
            enqueued = report.enqueued.len(),
            failed = report.failed.len(),
            "notification dispatched"
        );
        Ok(report)
    }

    /// Dispatches a composed message.
    ///
    /// ## Errors
    ///
    /// See [`dispatch`](Self::dispatch).
    pub async fn dispatch_composed(
        &self,
        message: &ComposedMessage,
        recipients: &RecipientSet,
        sender: &str,
    ) -> NotifyResult<DeliveryReport> {
        self.dispatch(&message.subject, &message.body, recipients, sender)
            .await
    }
}
