//! Login URL dispatch.

use std::sync::Arc;

use forum_model::IdentityProviderKind;

use crate::provider::LoginRequestContext;
use crate::registry::ProviderRegistry;

/// Public entry point for starting an external login.
///
/// Stateless apart from the shared registry, so one instance serves all
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct LoginDispatcher {
    registry: Arc<ProviderRegistry>,
}

impl LoginDispatcher {
    /// Creates a dispatcher over `registry`.
    #[must_use]
    pub const fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the provider registry.
    #[must_use]
    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Generates the login URL for `kind`.
    ///
    /// Returns an empty string when no provider is registered for `kind`.
    /// Callers treat the empty string as "provider unavailable".
    #[must_use]
    pub fn generate_login_url(
        &self,
        kind: IdentityProviderKind,
        wants_popup_flow: bool,
        connect_to_existing_user: bool,
    ) -> String {
        match self.registry.resolve(kind) {
            Some(provider) => provider.generate_login_url(wants_popup_flow, connect_to_existing_user),
            None => {
                tracing::debug!(provider = %kind, "no login provider registered");
                String::new()
            }
        }
    }

    /// Generates the login URL for a parsed request.
    #[must_use]
    pub fn generate_login_url_for(&self, request: &LoginRequestContext) -> String {
        self.generate_login_url(
            request.provider,
            request.wants_popup_flow,
            request.connect_to_existing_user,
        )
    }

    /// Generates the login URL for a provider given by name.
    ///
    /// Names match case-insensitively. Unknown names yield an empty string.
    #[must_use]
    pub fn generate_login_url_by_name(
        &self,
        provider: &str,
        wants_popup_flow: bool,
        connect_to_existing_user: bool,
    ) -> String {
        match provider.parse::<IdentityProviderKind>() {
            Ok(kind) => self.generate_login_url(kind, wants_popup_flow, connect_to_existing_user),
            Err(err) => {
                tracing::debug!(error = %err, "login requested for unknown provider");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use forum_core::{ProviderCredentials, SsoConfig};

    use super::*;

    fn dispatcher(config: &SsoConfig) -> LoginDispatcher {
        let registry = ProviderRegistry::from_config(config, "https://forum.example.com").unwrap();
        LoginDispatcher::new(Arc::new(registry))
    }

    fn all_providers() -> SsoConfig {
        SsoConfig {
            twitter: Some(ProviderCredentials::new("t", "s")),
            facebook: Some(ProviderCredentials::new("f", "s")),
            google: Some(ProviderCredentials::new("g", "s")),
        }
    }

    #[test]
    fn dispatches_to_the_matching_provider() {
        let dispatcher = dispatcher(&all_providers());

        assert!(dispatcher
            .generate_login_url(IdentityProviderKind::Twitter, false, false)
            .starts_with("https://api.twitter.com/"));
        assert!(dispatcher
            .generate_login_url(IdentityProviderKind::Facebook, false, false)
            .starts_with("https://www.facebook.com/"));
        assert!(dispatcher
            .generate_login_url(IdentityProviderKind::Google, false, false)
            .starts_with("https://accounts.google.com/"));
    }

    #[test]
    fn unregistered_provider_yields_empty_url() {
        let dispatcher = dispatcher(&SsoConfig::default());
        assert_eq!(
            dispatcher.generate_login_url(IdentityProviderKind::Google, true, true),
            ""
        );
    }

    #[test]
    fn output_is_deterministic() {
        let dispatcher = dispatcher(&all_providers());
        let first = dispatcher.generate_login_url(IdentityProviderKind::Facebook, true, false);
        let second = dispatcher.generate_login_url(IdentityProviderKind::Facebook, true, false);
        assert_eq!(first, second);
    }

    #[test]
    fn flags_are_forwarded() {
        let dispatcher = dispatcher(&all_providers());
        let request = LoginRequestContext::new(IdentityProviderKind::Google)
            .popup()
            .connect_current_user();

        let url = dispatcher.generate_login_url_for(&request);
        assert!(url.contains("popup%3Dtrue"));
        assert!(url.contains("connectCurrent%3Dtrue"));
    }

    #[test]
    fn by_name_is_case_insensitive_and_tolerates_unknown_names() {
        let dispatcher = dispatcher(&all_providers());

        assert_eq!(
            dispatcher.generate_login_url_by_name("GOOGLE", false, false),
            dispatcher.generate_login_url(IdentityProviderKind::Google, false, false)
        );
        assert_eq!(dispatcher.generate_login_url_by_name("myspace", false, false), "");
        assert_eq!(dispatcher.generate_login_url_by_name("", false, false), "");
    }
}
