//! Configuration loading from the environment.

use url::Url;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Listening port.
pub const PORT: &str = "PORT";
/// Downstream analysis service base URL.
pub const ANALYSIS_SERVICE_URL: &str = "ANALYSIS_SERVICE_URL";
/// Deadline for the outbound analyze call, in seconds.
pub const ANALYSIS_TIMEOUT_SECS: &str = "ANALYSIS_TIMEOUT_SECS";
/// Deadline for inbound requests, in seconds.
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
/// Maximum accepted request body size, in bytes.
pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// A variable was set to a value that does not parse.
    Invalid { var: &'static str, value: String },
    /// The assembled configuration failed semantic validation.
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid { var, value } => {
                write!(f, "Invalid value for {}: '{}'", var, value)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from the process environment.
pub fn from_env() -> Result<ServiceConfig, ConfigError> {
    from_lookup(|var| std::env::var(var).ok())
}

/// Load and validate configuration through a variable lookup.
///
/// An unset or empty variable falls back to its default. Tests inject a map
/// here instead of mutating process-wide environment state.
pub fn from_lookup<F>(lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ServiceConfig::default();

    if let Some(port) = non_empty(&lookup, PORT) {
        config.listener.port = parse(PORT, &port)?;
    }
    if let Some(base_url) = non_empty(&lookup, ANALYSIS_SERVICE_URL) {
        config.downstream.base_url =
            Url::parse(&base_url).map_err(|_| ConfigError::Invalid {
                var: ANALYSIS_SERVICE_URL,
                value: base_url,
            })?;
    }
    if let Some(secs) = non_empty(&lookup, ANALYSIS_TIMEOUT_SECS) {
        config.downstream.timeout_secs = parse(ANALYSIS_TIMEOUT_SECS, &secs)?;
    }
    if let Some(secs) = non_empty(&lookup, REQUEST_TIMEOUT_SECS) {
        config.timeouts.request_secs = parse(REQUEST_TIMEOUT_SECS, &secs)?;
    }
    if let Some(bytes) = non_empty(&lookup, MAX_BODY_BYTES) {
        config.limits.max_body_bytes = parse(MAX_BODY_BYTES, &bytes)?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn non_empty<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|value| !value.is_empty())
}

fn parse<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}
