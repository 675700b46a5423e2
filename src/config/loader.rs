//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{LogFormat, MockConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("PORT={value:?} is not a valid port")]
    InvalidPort { value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values given on the command line. Each one set wins over the file and `PORT`.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub host: Option<String>,
    pub log_format: Option<LogFormat>,
}

impl ConfigOverrides {
    fn apply(self, config: &mut MockConfig) {
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(host) = self.host {
            config.listener.host = host;
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format;
        }
    }
}

/// Load configuration: optional TOML file, then `PORT`, then `overrides`, then validation.
pub fn load_config(path: Option<&Path>, overrides: ConfigOverrides) -> Result<MockConfig, ConfigError> {
    load_config_with_env(path, overrides, |key| std::env::var(key).ok())
}

/// [`load_config`] with environment variables read through `lookup`.
pub fn load_config_with_env<F>(
    path: Option<&Path>,
    overrides: ConfigOverrides,
    lookup: F,
) -> Result<MockConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => MockConfig::default(),
    };

    // An explicit port makes `PORT` irrelevant, even when it is garbage.
    let mut config = if overrides.port.is_some() {
        config
    } else {
        apply_env_overrides(config, lookup)?
    };
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides using `lookup` to read variables.
///
/// An empty `PORT` is treated as unset.
pub fn apply_env_overrides<F>(mut config: MockConfig, lookup: F) -> Result<MockConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(PORT_ENV).filter(|v| !v.trim().is_empty()) {
        config.listener.port = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort { value })?;
    }

    Ok(config)
}
