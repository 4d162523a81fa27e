//! Outbound mail store trait.

use async_trait::async_trait;
use forum_model::MailMessage;

use crate::error::StorageResult;

/// Durable outbound mail queue.
///
/// Delivery and retries happen elsewhere; this store only accepts messages.
#[async_trait]
pub trait MailStore: Send + Sync {
    /// Queues one message for delivery.
    ///
    /// ## Errors
    ///
    /// Returns an error if the message was not queued, e.g. because the
    /// recipient address is rejected.
    async fn enqueue(&self, message: MailMessage) -> StorageResult<()>;
}
