//! # forum-session
//!
//! Session management for the forum single sign-on pipeline.
//!
//! Cookie and transport mechanics are outside this crate; it only models
//! "an authenticated session now exists for this user" and the authority
//! that creates one.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod authority;
pub mod error;
pub mod memory;
pub mod session;

pub use authority::SessionAuthority;
pub use error::{SessionError, SessionResult};
pub use memory::InMemorySessionAuthority;
pub use session::{SessionLifetime, UserSession};
