//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, request ID layers)
//!     → middleware/logging.rs (buffer body, log RequestRecord)
//!     → request.rs (JSON body parsing, RequestRecord)
//!     → fixed route handler or framework 404/405
//!     → response.rs ({"status":"ok"} or JSON error)
//!     → Send to client
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestError, RequestRecord};
pub use response::StatusOk;
pub use server::{build_router, MockServer};
