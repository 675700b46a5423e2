//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port)
//!     → listener.rs (bind, BindError on failure)
//!     → TcpListener handed to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - No connection limit: each connection is served independently by hyper
//! - Bind failures are fatal and surface as a typed error

pub mod listener;

pub use listener::{bind, BindError};
