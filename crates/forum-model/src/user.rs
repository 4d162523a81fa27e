//! User identity as seen by the single sign-on pipeline.

use serde::{Deserialize, Serialize};

/// A forum user, referenced by value.
///
/// Owned by the user directory; nothing in this workspace mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Numeric user id.
    pub user_id: i32,
    /// Login name.
    pub user_name: String,
    /// Primary email address.
    pub email: String,
}

impl UserIdentity {
    /// Creates a user identity.
    #[must_use]
    pub fn new(user_id: i32, user_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            email: email.into(),
        }
    }
}
