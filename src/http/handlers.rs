//! Synchronous request handlers.
//!
//! # Responsibilities
//! - Liveness endpoints (`GET /status`, `GET /health`)
//! - Echo-style processing endpoint (`POST /process`)
//!
//! # Design Decisions
//! - Handlers are pure functions of the request plus shared state
//! - Payload logging is bounded; arbitrary client bytes are never logged
//!   in full

use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::http::response::{envelope_response, Envelope};
use crate::http::server::AppState;

/// Prefix of the success message returned by the process handler.
pub const PROCESS_MESSAGE_PREFIX: &str = "Payload processed successfully: ";

/// Longest payload fragment that is echoed into the diagnostic log.
const PAYLOAD_PREVIEW_BYTES: usize = 256;

/// `GET /status` — fixed liveness envelope.
pub async fn status() -> Response {
    let envelope = Envelope::new("Analysis gateway is running");
    envelope_response(StatusCode::OK, &envelope)
}

/// `GET /health` — fixed health envelope.
pub async fn health() -> Response {
    let envelope = Envelope::new("Analysis gateway is healthy");
    envelope_response(StatusCode::OK, &envelope)
}

/// `POST /process` — echo the request body back inside an envelope.
///
/// The body is accepted as arbitrary bytes; no content validation happens
/// here. A body that cannot be read answers 400.
pub async fn process(State(state): State<AppState>, request: Request) -> Response {
    let limit = state.config.limits.max_body_bytes;
    let body = match to_bytes(request.into_body(), limit).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::warn!(error = %error, "Failed to read process request body");
            return (StatusCode::BAD_REQUEST, "Failed to read request body").into_response();
        }
    };

    tracing::debug!(payload = %payload_preview(&body), "Processing payload");

    let text = String::from_utf8_lossy(&body);
    let envelope = Envelope::new(format!("{}{}", PROCESS_MESSAGE_PREFIX, text));
    envelope_response(StatusCode::OK, &envelope)
}

/// Bounded, lossy rendering of a payload for diagnostic logs.
fn payload_preview(body: &[u8]) -> String {
    if body.len() <= PAYLOAD_PREVIEW_BYTES {
        String::from_utf8_lossy(body).into_owned()
    } else {
        format!(
            "{}... ({} bytes total)",
            String::from_utf8_lossy(&body[..PAYLOAD_PREVIEW_BYTES]),
            body.len()
        )
    }
}
