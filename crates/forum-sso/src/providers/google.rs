//! Google Sign-In provider.

use forum_core::ProviderCredentials;
use forum_model::IdentityProviderKind;
use url::Url;

use super::{endpoint, require_client_id};
use crate::callback::CallbackBase;
use crate::error::SsoResult;
use crate::provider::LoginUrlProvider;

/// Google `OAuth2` authorization endpoint.
const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Scopes requested from Google.
const SCOPES: &str = "openid email profile";

/// Google provider.
#[derive(Debug, Clone)]
pub struct GoogleProvider {
    client_id: String,
    authorize: Url,
    callback: CallbackBase,
}

impl GoogleProvider {
    /// Creates a Google provider.
    ///
    /// ## Errors
    ///
    /// Returns `SsoError::Configuration` if the client id is empty.
    pub fn new(credentials: &ProviderCredentials, callback: CallbackBase) -> SsoResult<Self> {
        require_client_id(&credentials.client_id, "google")?;
        Ok(Self {
            client_id: credentials.client_id.clone(),
            authorize: endpoint(AUTHORIZATION_ENDPOINT)?,
            callback,
        })
    }
}

impl LoginUrlProvider for GoogleProvider {
    fn kind(&self) -> IdentityProviderKind {
        IdentityProviderKind::Google
    }

    fn generate_login_url(&self, wants_popup_flow: bool, connect_to_existing_user: bool) -> String {
        let redirect = self
            .callback
            .for_provider(self.kind(), wants_popup_flow, connect_to_existing_user);

        let mut url = self.authorize.clone();
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", redirect.as_str())
            .append_pair("response_type", "code")
            .append_pair("scope", SCOPES);
        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> GoogleProvider {
        GoogleProvider::new(
            &ProviderCredentials::new("google-client", "secret"),
            CallbackBase::parse("https://forum.example.com").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn url_targets_google_with_encoded_callback() {
        let url = Url::parse(&provider().generate_login_url(false, false)).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(url.host_str(), Some("accounts.google.com"));
        assert!(pairs.contains(&("client_id".into(), "google-client".into())));
        assert!(pairs.contains(&(
            "redirect_uri".into(),
            "https://forum.example.com/auth?auth=google".into()
        )));
        assert!(pairs.contains(&("scope".into(), SCOPES.into())));
    }

    #[test]
    fn connect_flag_reaches_the_callback() {
        let url = provider().generate_login_url(false, true);
        assert!(url.contains("connectCurrent%3Dtrue"));
    }

    #[test]
    fn secret_never_appears_in_url() {
        assert!(!provider().generate_login_url(true, true).contains("secret"));
    }

    #[test]
    fn empty_client_id_is_rejected() {
        let result = GoogleProvider::new(
            &ProviderCredentials::new(" ", "secret"),
            CallbackBase::parse("https://forum.example.com").unwrap(),
        );
        assert!(result.is_err());
    }
}
