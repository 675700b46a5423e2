//! Observability subsystem.
//!
//! All output is structured `tracing` events written to stdout by the
//! subscriber installed in [`logging::init`]. Request records are emitted by
//! the HTTP logging middleware.

pub mod logging;
