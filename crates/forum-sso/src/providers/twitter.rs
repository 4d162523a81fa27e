//! Twitter provider.

use forum_core::ProviderCredentials;
use forum_model::IdentityProviderKind;
use url::Url;

use super::{endpoint, require_client_id};
use crate::callback::CallbackBase;
use crate::error::SsoResult;
use crate::provider::LoginUrlProvider;

/// Twitter OAuth authenticate endpoint.
const AUTHENTICATE_ENDPOINT: &str = "https://api.twitter.com/oauth/authenticate";

/// Twitter provider.
#[derive(Debug, Clone)]
pub struct TwitterProvider {
    consumer_key: String,
    authenticate: Url,
    callback: CallbackBase,
}

impl TwitterProvider {
    /// Creates a Twitter provider.
    ///
    /// ## Errors
    ///
    /// Returns `SsoError::Configuration` if the consumer key is empty.
    pub fn new(credentials: &ProviderCredentials, callback: CallbackBase) -> SsoResult<Self> {
        require_client_id(&credentials.client_id, "twitter")?;
        Ok(Self {
            consumer_key: credentials.client_id.clone(),
            authenticate: endpoint(AUTHENTICATE_ENDPOINT)?,
            callback,
        })
    }
}

impl LoginUrlProvider for TwitterProvider {
    fn kind(&self) -> IdentityProviderKind {
        IdentityProviderKind::Twitter
    }

    fn generate_login_url(&self, wants_popup_flow: bool, connect_to_existing_user: bool) -> String {
        let callback = self
            .callback
            .for_provider(self.kind(), wants_popup_flow, connect_to_existing_user);

        let mut url = self.authenticate.clone();
        url.query_pairs_mut()
            .append_pair("oauth_consumer_key", &self.consumer_key)
            .append_pair("oauth_callback", callback.as_str());
        url.into()
    }
}
