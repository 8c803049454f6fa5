//! Request logging middleware.
//!
//! # Responsibilities
//! - Log method, path, and remote address for every routed request
//! - Delegate to the wrapped handler untouched

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

/// Access log wrapping every registered route.
pub async fn access_log(
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        remote_addr = %remote,
        "Handling request"
    );
    next.run(request).await
}
