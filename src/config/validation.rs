//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the listener host is an IP address
//! - Validate value ranges (body limit > 0, log level parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MockConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::IpAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::MockConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.host `{0}` is not an IP address")]
    InvalidHost(String),

    #[error("limits.body_limit_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("observability.log_level `{0}` is not a valid filter directive")]
    InvalidLogLevel(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &MockConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::InvalidHost(config.listener.host.clone()));
    }

    if config.limits.body_limit_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
