//! Administrator notification flows.

use std::sync::Arc;

use forum_model::UserIdentity;
use forum_storage::BoardSettingsStore;

use crate::composer::NotificationComposer;
use crate::defaults::{BOT_USER_REGISTER_TEMPLATE, USER_REGISTER_TEMPLATE};
use crate::dispatcher::{DeliveryReport, NotificationDispatcher};
use crate::error::{NotifyError, NotifyResult};
use crate::link::AdminLinkBuilder;
use crate::recipients::{RecipientResolver, RecipientSet};
use crate::template::NotificationTemplate;

/// Sends registration and spam-bot notices to administrators.
#[derive(Clone)]
pub struct AdminNotifier {
    boards: Arc<dyn BoardSettingsStore>,
    resolver: RecipientResolver,
    composer: NotificationComposer,
    dispatcher: NotificationDispatcher,
    links: AdminLinkBuilder,
}

impl std::fmt::Debug for AdminNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminNotifier")
            .field("links", &self.links)
            .finish_non_exhaustive()
    }
}

impl AdminNotifier {
    /// Creates a notifier from its stages.
    #[must_use]
    pub fn new(
        boards: Arc<dyn BoardSettingsStore>,
        resolver: RecipientResolver,
        composer: NotificationComposer,
        dispatcher: NotificationDispatcher,
        links: AdminLinkBuilder,
    ) -> Self {
        Self {
            boards,
            resolver,
            composer,
            dispatcher,
            links,
        }
    }

    /// Notifies the board's configured list that `user` registered.
    ///
    /// ## Errors
    ///
    /// Fails on invalid input, a failed lookup or a missing template.
    /// Rejected recipients are reported, not returned as errors.
    pub async fn send_registration_notification(
        &self,
        board_id: i32,
        user: &UserIdentity,
    ) -> NotifyResult<DeliveryReport> {
        validate(user)?;
        let recipients = self.resolver.registration_notify_recipients(board_id).await?;
        self.send(board_id, USER_REGISTER_TEMPLATE, user, &recipients).await
    }

    /// Notifies the administrators group that `user` looks like a spam bot.
    ///
    /// ## Errors
    ///
    /// Fails on invalid input, a failed lookup or a missing template.
    /// Rejected recipients are reported, not returned as errors.
    pub async fn send_spam_bot_notification(
        &self,
        board_id: i32,
        user: &UserIdentity,
    ) -> NotifyResult<DeliveryReport> {
        validate(user)?;
        let recipients = self.resolver.spam_bot_notify_recipients(board_id).await?;
        self.send(board_id, BOT_USER_REGISTER_TEMPLATE, user, &recipients).await
    }

    async fn send(
        &self,
        board_id: i32,
        template_key: &str,
        user: &UserIdentity,
        recipients: &RecipientSet,
    ) -> NotifyResult<DeliveryReport> {
        if recipients.is_empty() {
            tracing::debug!(board_id, template = template_key, "no recipients configured");
            return Ok(DeliveryReport::default());
        }

        let board = self.boards.get(board_id).await?;
        let template = NotificationTemplate::for_user(
            template_key,
            user,
            &board.name,
            self.links.edit_user(user.user_id),
        );
        let message = self.composer.compose(&template, &board.name)?;

        let report = self
            .dispatcher
            .dispatch_composed(&message, recipients, &board.forum_email)
            .await?;

        tracing::info!(
            board_id,
            user_id = user.user_id,
            template = template_key,
            enqueued = report.enqueued.len(),
            failed = report.failed.len(),
            "administrator notification sent"
        );
        Ok(report)
    }
}

fn validate(user: &UserIdentity) -> NotifyResult<()> {
    if user.user_id <= 0 {
        return Err(NotifyError::invalid_argument(format!(
            "user id must be positive, got {}",
            user.user_id
        )));
    }
    if user.user_name.trim().is_empty() {
        return Err(NotifyError::invalid_argument("user name is required"));
    }
    Ok(())
}
