//! Identity provider implementations.
//!
//! Each provider builds its authorize URL from its client credentials and
//! the forum's callback URL. Token exchange and profile retrieval belong to
//! the provider client libraries and are not modelled here.

pub mod facebook;
pub mod google;
pub mod twitter;

pub use facebook::FacebookProvider;
pub use google::GoogleProvider;
pub use twitter::TwitterProvider;

use url::Url;

use crate::error::{SsoError, SsoResult};

/// Parses a provider endpoint constant.
fn endpoint(raw: &str) -> SsoResult<Url> {
    Url::parse(raw).map_err(|e| SsoError::config(format!("invalid provider endpoint '{raw}': {e}")))
}

/// Fails fast on credentials that cannot produce a usable URL.
fn require_client_id(client_id: &str, provider: &str) -> SsoResult<()> {
    if client_id.trim().is_empty() {
        return Err(SsoError::config(format!("{provider} client id is empty")));
    }
    Ok(())
}
