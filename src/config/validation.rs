//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (parsing handles syntactic)
//! - Check the downstream URL is usable for outbound calls
//! - Validate value ranges (timeouts > 0, body limit > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::ServiceConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub enum ValidationError {
    /// Downstream URL scheme is not http or https.
    DownstreamScheme(String),
    /// Downstream URL has no host.
    DownstreamHost,
    /// A timeout is configured as zero.
    ZeroTimeout(&'static str),
    /// The body limit is configured as zero.
    ZeroBodyLimit,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::DownstreamScheme(scheme) => {
                write!(f, "downstream URL scheme '{}' is not http or https", scheme)
            }
            ValidationError::DownstreamHost => write!(f, "downstream URL has no host"),
            ValidationError::ZeroTimeout(which) => {
                write!(f, "{} timeout must be greater than zero", which)
            }
            ValidationError::ZeroBodyLimit => {
                write!(f, "body limit must be greater than zero")
            }
        }
    }
}

/// Validate a loaded configuration, collecting every failure.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.downstream.base_url.scheme() {
        "http" | "https" => {}
        other => errors.push(ValidationError::DownstreamScheme(other.to_string())),
    }
    if config.downstream.base_url.host_str().is_none() {
        errors.push(ValidationError::DownstreamHost);
    }
    if config.downstream.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("downstream"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("request"));
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_failure() {
        let mut config = ServiceConfig::default();
        config.downstream.timeout_secs = 0;
        config.timeouts.request_secs = 0;
        config.limits.max_body_bytes = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = ServiceConfig::default();
        config.downstream.base_url = url::Url::parse("ftp://example.com").unwrap();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::DownstreamScheme(_)]
        ));
    }
}
