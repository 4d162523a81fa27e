//! Login audit trail.
//!
//! Subscribes to the event bus in its own task and writes each login as a
//! structured log record.

use forum_core::EventBus;
use forum_model::DomainEvent;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use tokio::task::JoinHandle;

/// Spawns the audit subscriber. The task ends when the bus is dropped.
pub fn spawn_login_audit(events: &EventBus<DomainEvent>) -> JoinHandle<()> {
    let receiver = events.subscribe();
    tokio::spawn(run(receiver))
}

async fn run(mut receiver: Receiver<DomainEvent>) {
    loop {
        match receiver.recv().await {
            Ok(DomainEvent::SsoLogin(event)) => {
                tracing::info!(
                    target: "audit",
                    event_id = %event.id,
                    user_id = event.user_id,
                    provider = ?event.occurred_via_provider,
                    occurred_at = %event.occurred_at,
                    "single sign-on login"
                );
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(target: "audit", skipped, "audit subscriber lagged, events dropped");
            }
            Err(RecvError::Closed) => break,
        }
    }
    tracing::debug!(target: "audit", "audit subscriber stopped");
}
