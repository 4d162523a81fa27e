//! External identity provider kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// External identity providers a user can sign in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityProviderKind {
    /// Twitter (OAuth 1.0a).
    Twitter,
    /// Facebook Login.
    Facebook,
    /// Google Sign-In.
    Google,
}

impl IdentityProviderKind {
    /// All provider kinds known at compile time.
    pub const ALL: [Self; 3] = [Self::Twitter, Self::Facebook, Self::Google];

    /// Returns the lowercase wire name (`"twitter"`, ...).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
            Self::Google => "google",
        }
    }
}

impl fmt::Display for IdentityProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProviderKind(pub String);

impl fmt::Display for UnknownProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown identity provider: {}", self.0)
    }
}

impl std::error::Error for UnknownProviderKind {}

impl FromStr for IdentityProviderKind {
    type Err = UnknownProviderKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownProviderKind(s.to_string()))
    }
}
