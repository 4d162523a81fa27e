//! # forum-spi
//!
//! Service registry used by the composition root to hand collaborators to
//! components.
//!
//! ## Design
//!
//! Components never reach into the registry themselves. The registry is
//! consulted once, at startup, and the resolved services are passed to
//! constructors explicitly:
//! - [`ServiceRegistry`] - type-keyed, optionally named service container
//! - [`SpiError`] - resolution failures

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod registry;

pub use error::{SpiError, SpiResult};
pub use registry::{ServiceRegistry, ServiceRequirement};
