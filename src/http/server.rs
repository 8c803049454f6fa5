//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, limits, timeout, access log)
//! - Bind handlers to their method+path pairs
//! - Run the server with graceful shutdown
//!
//! # Routes
//! - `GET /status` — fixed liveness envelope
//! - `GET /health` — fixed health envelope
//! - `POST /process` — echo body into an envelope
//! - `POST /analyze` — relay to the downstream analysis service

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::middleware::access_log;
use crate::http::{handlers, relay};
use crate::lifecycle::signals;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Validated service configuration.
    pub config: Arc<ServiceConfig>,
    /// Shared client for outbound downstream calls.
    pub client: Client<HttpConnector, Body>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let state = AppState {
            config: Arc::new(config),
            client,
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let request_timeout = Duration::from_secs(state.config.timeouts.request_secs);
        let max_body_bytes = state.config.limits.max_body_bytes;

        Router::new()
            .route("/status", get(handlers::status))
            .route("/health", get(handlers::health))
            .route("/process", post(handlers::process))
            .route("/analyze", post(relay::analyze))
            .with_state(state)
            .layer(middleware::from_fn(access_log))
            .layer(TimeoutLayer::new(request_timeout))
            .layer(RequestBodyLimitLayer::new(max_body_bytes))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns when a shutdown is signalled (broadcast or OS signal) and
    /// in-flight requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = signals::shutdown_signal() => {}
                    _ = shutdown.recv() => {}
                }
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
