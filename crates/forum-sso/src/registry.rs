//! Provider registry.

use std::collections::HashMap;
use std::sync::Arc;

use forum_core::SsoConfig;
use forum_model::IdentityProviderKind;

use crate::callback::CallbackBase;
use crate::error::SsoResult;
use crate::provider::LoginUrlProvider;
use crate::providers::{FacebookProvider, GoogleProvider, TwitterProvider};

/// Maps each configured provider kind to its implementation.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct ProviderRegistry {
    providers: HashMap<IdentityProviderKind, Arc<dyn LoginUrlProvider>>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry holding every provider that has credentials.
    ///
    /// ## Errors
    ///
    /// Returns `SsoError::Configuration` if the base URL or a provider's
    /// credentials are unusable.
    pub fn from_config(config: &SsoConfig, base_url: &str) -> SsoResult<Self> {
        let callback = CallbackBase::parse(base_url)?;
        let mut registry = Self::new();

        if let Some(creds) = &config.twitter {
            registry.register(Arc::new(TwitterProvider::new(creds, callback.clone())?));
        }
        if let Some(creds) = &config.facebook {
            registry.register(Arc::new(FacebookProvider::new(creds, callback.clone())?));
        }
        if let Some(creds) = &config.google {
            registry.register(Arc::new(GoogleProvider::new(creds, callback)?));
        }

        tracing::info!(providers = ?registry.kinds(), "identity providers registered");
        Ok(registry)
    }

    /// Registers a provider under its own kind, replacing any previous one.
    pub fn register(&mut self, provider: Arc<dyn LoginUrlProvider>) {
        self.providers.insert(provider.kind(), provider);
    }

    /// Resolves the provider for `kind`, if one is registered.
    #[must_use]
    pub fn resolve(&self, kind: IdentityProviderKind) -> Option<Arc<dyn LoginUrlProvider>> {
        self.providers.get(&kind).cloned()
    }

    /// Returns the registered kinds in declaration order.
    #[must_use]
    pub fn kinds(&self) -> Vec<IdentityProviderKind> {
        let mut kinds: Vec<_> = self.providers.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Returns the number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns whether no provider is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use forum_core::ProviderCredentials;

    use super::*;

    #[test]
    fn registers_only_configured_providers() {
        let config = SsoConfig {
            google: Some(ProviderCredentials::new("g", "s")),
            twitter: Some(ProviderCredentials::new("t", "s")),
            ..SsoConfig::default()
        };

        let registry = ProviderRegistry::from_config(&config, "https://forum.example.com").unwrap();

        assert_eq!(
            registry.kinds(),
            vec![IdentityProviderKind::Twitter, IdentityProviderKind::Google]
        );
        assert!(registry.resolve(IdentityProviderKind::Facebook).is_none());
    }

    #[test]
    fn bad_base_url_fails_construction() {
        let config = SsoConfig {
            google: Some(ProviderCredentials::new("g", "s")),
            ..SsoConfig::default()
        };
        assert!(ProviderRegistry::from_config(&config, "::nope").is_err());
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let callback = CallbackBase::parse("https://a.example.com").unwrap();
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(
            GoogleProvider::new(&ProviderCredentials::new("first", "s"), callback.clone()).unwrap(),
        ));
        registry.register(Arc::new(
            GoogleProvider::new(&ProviderCredentials::new("second", "s"), callback).unwrap(),
        ));

        assert_eq!(registry.len(), 1);
        let url = registry
            .resolve(IdentityProviderKind::Google)
            .unwrap()
            .generate_login_url(false, false);
        assert!(url.contains("client_id=second"));
    }
}
