//! Notification rendering.

use std::sync::Arc;

use crate::defaults::{COMMON_PAGE, TEMPLATES_PAGE};
use crate::error::{NotifyError, NotifyResult};
use crate::localization::Localization;
use crate::template::NotificationTemplate;

/// A rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedMessage {
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Renders templates against their bindings.
#[derive(Clone)]
pub struct NotificationComposer {
    localization: Arc<dyn Localization>,
}

impl std::fmt::Debug for NotificationComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationComposer").finish_non_exhaustive()
    }
}

impl NotificationComposer {
    /// Creates a composer reading texts from `localization`.
    #[must_use]
    pub fn new(localization: Arc<dyn Localization>) -> Self {
        Self { localization }
    }

    /// Renders `template` for the board named `board_name`.
    ///
    /// The subject is the localized `{key}_EMAIL_SUBJECT` text with `{0}`
    /// replaced by the board name. The body is the stored template with
    /// every bound placeholder replaced literally; unbound placeholders stay
    /// as written.
    ///
    /// ## Errors
    ///
    /// Returns `NotifyError::TemplateNotFound` if the body or subject text
    /// does not exist.
    pub fn compose(
        &self,
        template: &NotificationTemplate,
        board_name: &str,
    ) -> NotifyResult<ComposedMessage> {
        let body = self
            .localization
            .get_text(TEMPLATES_PAGE, &template.template_key)
            .ok_or_else(|| NotifyError::template_not_found(TEMPLATES_PAGE, &template.template_key))?;

        let subject_tag = template.subject_tag();
        let subject = self
            .localization
            .get_text(COMMON_PAGE, &subject_tag)
            .ok_or_else(|| NotifyError::template_not_found(COMMON_PAGE, &subject_tag))?;

        Ok(ComposedMessage {
            subject: subject.replace("{0}", board_name),
            body: substitute(&body, template),
        })
    }
}

fn substitute(text: &str, template: &NotificationTemplate) -> String {
    template
        .parameter_bindings
        .iter()
        .fold(text.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
}
