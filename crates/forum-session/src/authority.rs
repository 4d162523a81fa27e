//! Session authority trait.

use async_trait::async_trait;

use crate::error::SessionResult;
use crate::session::UserSession;

/// Issues authenticated sessions.
///
/// Implementations may set a cookie, write a session row, or both; callers
/// only rely on the returned session existing once this resolves.
#[async_trait]
pub trait SessionAuthority: Send + Sync {
    /// Establishes an authenticated session for `user_name`.
    ///
    /// `persistent` requests a long-lived ("remember me") session.
    async fn establish_session(&self, user_name: &str, persistent: bool)
        -> SessionResult<UserSession>;
}
