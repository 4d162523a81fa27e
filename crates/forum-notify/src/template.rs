//! Notification templates.

use std::collections::BTreeMap;

use forum_model::UserIdentity;

/// A template key plus the values for its placeholders.
///
/// Placeholders are written with braces (`{user}`); bindings are keyed by
/// the bare name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTemplate {
    /// Key selecting the stored body and subject.
    pub template_key: String,
    /// Placeholder name to value.
    pub parameter_bindings: BTreeMap<String, String>,
}

impl NotificationTemplate {
    /// Creates a template with no bindings.
    #[must_use]
    pub fn new(template_key: impl Into<String>) -> Self {
        Self {
            template_key: template_key.into(),
            parameter_bindings: BTreeMap::new(),
        }
    }

    /// Binds `name` to `value`.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameter_bindings.insert(name.into(), value.into());
        self
    }

    /// Binds the four placeholders of an administrator notice.
    #[must_use]
    pub fn for_user(
        template_key: impl Into<String>,
        user: &UserIdentity,
        forum_name: &str,
        admin_link: impl Into<String>,
    ) -> Self {
        Self::new(template_key)
            .bind("adminlink", admin_link)
            .bind("user", user.user_name.clone())
            .bind("email", user.email.clone())
            .bind("forumname", forum_name)
    }

    /// Subject tag derived from the template key.
    #[must_use]
    pub fn subject_tag(&self) -> String {
        format!("{}{}", self.template_key, crate::defaults::SUBJECT_SUFFIX)
    }
}
