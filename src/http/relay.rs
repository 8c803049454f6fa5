//! Analyze relay — the forwarding core.
//!
//! # Responsibilities
//! - Read the inbound body and forward it to the downstream analysis service
//! - Relay the downstream status code and body back verbatim
//! - Translate outbound failures into a generic 500 for the caller
//!
//! # Design Decisions
//! - The relay is a strict proxy: it never interprets the downstream result,
//!   a downstream error status passes through unchanged
//! - A single attempt per request; no retry, no circuit breaking
//! - The downstream body is streamed into the client response, not buffered;
//!   dropping the body releases the downstream connection on every exit path
//! - The outbound call runs under the configured deadline

use axum::body::{to_bytes, Body};
use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tokio::time;

use crate::http::server::AppState;

/// Errors on the analyze relay path.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The inbound request body could not be read.
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    /// The outbound request could not be constructed.
    #[error("failed to build downstream request: {0}")]
    Target(#[source] axum::http::Error),

    /// The downstream service could not be reached or failed mid-response.
    #[error("downstream call failed: {0}")]
    Unreachable(#[source] hyper_util::client::legacy::Error),

    /// The downstream service did not answer within the deadline.
    #[error("downstream call timed out after {0} seconds")]
    Timeout(u64),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        // Callers only ever see a generic message; detail stays in the logs.
        let (status, message) = match self {
            RelayError::BodyRead(_) => (StatusCode::BAD_REQUEST, "Failed to read request body"),
            RelayError::Target(_) | RelayError::Unreachable(_) | RelayError::Timeout(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to communicate with analysis service",
            ),
        };
        (status, message).into_response()
    }
}

/// `POST /analyze` — relay the request body to the downstream service.
pub async fn analyze(State(state): State<AppState>, request: Request) -> Response {
    match relay_analyze(&state, request).await {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(error = %error, "Analyze relay failed");
            error.into_response()
        }
    }
}

async fn relay_analyze(state: &AppState, request: Request) -> Result<Response, RelayError> {
    // 1. Read the inbound body fully; nothing is sent downstream on failure.
    let limit = state.config.limits.max_body_bytes;
    let payload = to_bytes(request.into_body(), limit)
        .await
        .map_err(RelayError::BodyRead)?;

    // 2. Build the outbound call against the configured downstream target.
    let target = state.config.downstream.analyze_target();
    let outbound = axum::http::Request::builder()
        .method(Method::POST)
        .uri(target.as_str())
        .header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )
        .body(Body::from(payload))
        .map_err(RelayError::Target)?;

    // 3. Single attempt, bounded by the configured deadline.
    let deadline = state.config.downstream.timeout();
    let upstream = match time::timeout(deadline, state.client.request(outbound)).await {
        Ok(Ok(response)) => response,
        Ok(Err(error)) => return Err(RelayError::Unreachable(error)),
        Err(_) => return Err(RelayError::Timeout(state.config.downstream.timeout_secs)),
    };

    tracing::debug!(
        status = %upstream.status(),
        target = %target,
        "Relaying downstream response"
    );

    // 4. Pass the status through and stream the body; the incoming body is
    //    dropped (and the connection released) whether or not the copy to
    //    the client completes.
    let (parts, body) = upstream.into_parts();
    let mut response = Response::new(Body::new(body));
    *response.status_mut() = parts.status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(response)
}
