//! Response envelope construction.
//!
//! # Responsibilities
//! - Define the JSON envelope returned by the synchronous handlers
//! - Serialize envelopes once per response
//! - Map encoding failures to a generic 500 without leaking detail
//!
//! # Design Decisions
//! - Envelopes are values: built fresh per request, never mutated
//! - Serialization is explicit so an encoding failure can be logged

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service identifier reported in every envelope.
pub const SERVICE_NAME: &str = "analysis-gateway";

/// Fixed JSON record returned by the status, health, and process handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    /// Originating service identifier.
    pub service: String,

    /// Human-readable outcome message.
    pub message: String,

    /// Time of handling.
    pub timestamp: DateTime<Utc>,
}

impl Envelope {
    /// Build an envelope stamped with the current time.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Serialize an envelope into a JSON response with the given status.
///
/// Encoding failure is logged and answered with a generic 500 body.
pub fn envelope_response(status: StatusCode, envelope: &Envelope) -> Response {
    match serde_json::to_vec(envelope) {
        Ok(body) => {
            let mut response = Response::new(Body::from(body));
            *response.status_mut() = status;
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            response
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to encode response envelope");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_json_shape() {
        let envelope = Envelope::new("all good");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["service"], SERVICE_NAME);
        assert_eq!(value["message"], "all good");
        let timestamp = value["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    }
}
