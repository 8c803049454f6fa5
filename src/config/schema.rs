//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits and carry defaults matching the deployment
//! environment the service ships into.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Default downstream analysis service base URL.
pub const DEFAULT_DOWNSTREAM_URL: &str = "http://python-service:8000";

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (port).
    pub listener: ListenerConfig,

    /// Downstream analysis service settings.
    pub downstream: DownstreamConfig,

    /// Timeout configuration for inbound requests.
    pub timeouts: TimeoutConfig,

    /// Request body limits.
    pub limits: LimitConfig,
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    ///
    /// See [`crate::config::env`] for the recognized variables.
    pub fn from_env() -> Result<Self, crate::config::ConfigError> {
        crate::config::env::from_env()
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Port to listen on, bound on all interfaces.
    pub port: u16,
}

impl ListenerConfig {
    /// Full bind address for the listener.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Downstream analysis service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DownstreamConfig {
    /// Base URL of the analysis service.
    pub base_url: Url,

    /// Deadline for the outbound analyze call, in seconds.
    pub timeout_secs: u64,
}

impl DownstreamConfig {
    /// Target URL for the analyze relay (`<base>/analyze`).
    pub fn analyze_target(&self) -> Url {
        let mut target = self.base_url.clone();
        target.set_path("/analyze");
        target
    }

    /// Outbound call deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_DOWNSTREAM_URL)
                .expect("default downstream URL is well-formed"),
            timeout_secs: 10,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl TimeoutConfig {
    /// Inbound request deadline.
    pub fn request(&self) -> Duration {
        Duration::from_secs(self.request_secs)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request body limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
        }
    }
}
