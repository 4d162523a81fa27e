//! Identity provider capability.

use std::fmt::Debug;

use forum_model::IdentityProviderKind;

/// A login attempt as requested by the browser. Consumed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginRequestContext {
    /// Provider to sign in through.
    pub provider: IdentityProviderKind,
    /// Whether the login runs in a popup window.
    pub wants_popup_flow: bool,
    /// Whether the external identity is linked to the signed-in user
    /// instead of starting a new session.
    pub connect_to_existing_user: bool,
}

impl LoginRequestContext {
    /// Creates a full-page login request.
    #[must_use]
    pub const fn new(provider: IdentityProviderKind) -> Self {
        Self {
            provider,
            wants_popup_flow: false,
            connect_to_existing_user: false,
        }
    }

    /// Requests the popup flow.
    #[must_use]
    pub const fn popup(mut self) -> Self {
        self.wants_popup_flow = true;
        self
    }

    /// Requests linking to the current user.
    #[must_use]
    pub const fn connect_current_user(mut self) -> Self {
        self.connect_to_existing_user = true;
        self
    }
}

/// Generates the URL that starts a login with one identity provider.
///
/// Each provider is a separate implementation registered in the
/// [`ProviderRegistry`](crate::ProviderRegistry); dispatch never matches on
/// provider kinds.
pub trait LoginUrlProvider: Send + Sync + Debug {
    /// Returns the provider this implementation serves.
    fn kind(&self) -> IdentityProviderKind;

    /// Builds the provider's login URL.
    ///
    /// Pure: depends only on the arguments and the provider's configuration.
    fn generate_login_url(&self, wants_popup_flow: bool, connect_to_existing_user: bool) -> String;
}
