//! End-to-End Integration Tests
//!
//! These tests run the complete login and notification pipeline against
//! the in-memory collaborators, wired the same way the server wires them.

mod login_pipeline;
mod notifications;
mod service_wiring;
