//! Facebook Login provider.

use forum_core::ProviderCredentials;
use forum_model::IdentityProviderKind;
use url::Url;

use super::{endpoint, require_client_id};
use crate::callback::CallbackBase;
use crate::error::SsoResult;
use crate::provider::LoginUrlProvider;

/// Facebook login dialog.
const DIALOG_ENDPOINT: &str = "https://www.facebook.com/dialog/oauth";

/// Facebook provider.
#[derive(Debug, Clone)]
pub struct FacebookProvider {
    app_id: String,
    dialog: Url,
    callback: CallbackBase,
}

impl FacebookProvider {
    /// Creates a Facebook provider.
    ///
    /// ## Errors
    ///
    /// Returns `SsoError::Configuration` if the application id is empty.
    pub fn new(credentials: &ProviderCredentials, callback: CallbackBase) -> SsoResult<Self> {
        require_client_id(&credentials.client_id, "facebook")?;
        Ok(Self {
            app_id: credentials.client_id.clone(),
            dialog: endpoint(DIALOG_ENDPOINT)?,
            callback,
        })
    }
}

impl LoginUrlProvider for FacebookProvider {
    fn kind(&self) -> IdentityProviderKind {
        IdentityProviderKind::Facebook
    }

    fn generate_login_url(&self, wants_popup_flow: bool, connect_to_existing_user: bool) -> String {
        let redirect = self
            .callback
            .for_provider(self.kind(), wants_popup_flow, connect_to_existing_user);

        let mut url = self.dialog.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client_id", &self.app_id)
                .append_pair("redirect_uri", redirect.as_str())
                .append_pair("response_type", "code")
                .append_pair("scope", "email");
            if wants_popup_flow {
                query.append_pair("display", "popup");
            }
        }
        url.into()
    }
}
