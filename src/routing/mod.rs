//! Route table.
//!
//! # Design Decisions
//! - Routes are a closed enum, not runtime configuration
//! - Immutable and `Copy`, so handlers share them without locks
//! - Anything not in the table falls through to the framework's 404

pub mod routes;

pub use routes::Route;
