//! Callback URLs the identity providers redirect back to.

use forum_model::IdentityProviderKind;
use url::Url;

use crate::error::{SsoError, SsoResult};

/// Path of the forum's provider callback handler, relative to the base URL.
pub const CALLBACK_PATH: &str = "auth";

/// Public base URL of the forum, normalized for joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackBase {
    base: Url,
}

impl CallbackBase {
    /// Parses the forum's public base URL.
    ///
    /// ## Errors
    ///
    /// Returns `SsoError::Configuration` if the URL is not absolute http(s).
    pub fn parse(base_url: &str) -> SsoResult<Self> {
        let mut base = Url::parse(base_url)
            .map_err(|e| SsoError::config(format!("invalid base URL '{base_url}': {e}")))?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(SsoError::config(format!(
                "base URL must be http or https: {base_url}"
            )));
        }

        // Url::join replaces the last segment unless the path ends in '/'.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);

        Ok(Self { base })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.base
    }

    /// Builds the callback URL for one provider.
    ///
    /// `{base}/auth?auth={provider}`, plus `popup=true` and
    /// `connectCurrent=true` when requested.
    #[must_use]
    pub fn for_provider(
        &self,
        kind: IdentityProviderKind,
        wants_popup_flow: bool,
        connect_to_existing_user: bool,
    ) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!("{}{CALLBACK_PATH}", self.base.path()));
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("auth", kind.as_str());
            if wants_popup_flow {
                query.append_pair("popup", "true");
            }
            if connect_to_existing_user {
                query.append_pair("connectCurrent", "true");
            }
        }
        url
    }
}
