//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → PORT environment override
//!     → validation.rs (semantic checks)
//!     → MockConfig (validated, immutable)
//!     → passed by value to server::start
//! ```
//!
//! # Design Decisions
//! - Config is an explicit value handed to `start`, never a global
//! - All fields have defaults so an empty environment is a valid setup
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, ConfigOverrides};
pub use schema::{LimitsConfig, ListenerConfig, LogFormat, MockConfig, ObservabilityConfig};
