//! Mock external services for integration testing.
//!
//! Stands in for the doctor calendar, room reservation and email
//! notification services: every `POST` to one of their paths is logged and
//! answered with `{"status":"ok"}`.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──▶ net::listener ──▶ http::server ──▶ http::middleware::logging ──▶ routing
//!                                                       │                         │
//!                                                       ▼                         ▼
//!                                                 RequestRecord           {"status":"ok"}
//!                                                  (stdout log)          or 404 / 405
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::MockConfig;
pub use http::MockServer;
pub use lifecycle::{start, Shutdown};
