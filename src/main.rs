//! Analysis Gateway
//!
//! A small HTTP service that fronts a downstream analysis service. It exposes
//! liveness endpoints, an echo-style processing endpoint, and an `/analyze`
//! endpoint that relays request bodies to the downstream service and passes
//! its response back verbatim.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────┐
//!                        │             ANALYSIS GATEWAY             │
//!                        │                                          │
//!     Client Request     │  ┌─────────┐      ┌──────────────────┐  │
//!     ───────────────────┼─▶│  http   │─────▶│     handlers     │  │
//!                        │  │ server  │      │ status / health  │  │
//!                        │  └─────────┘      │     process      │  │
//!                        │                   └──────────────────┘  │
//!                        │                   ┌──────────────────┐  │
//!     Client Response    │                   │      relay       │  │    Downstream
//!     ◀──────────────────┼───────────────────│    /analyze      │◀─┼──▶ analysis
//!                        │                   └──────────────────┘  │    service
//!                        │                                          │
//!                        │  ┌────────────────────────────────────┐  │
//!                        │  │        Cross-Cutting Concerns      │  │
//!                        │  │  ┌────────┐ ┌─────────┐ ┌────────┐ │  │
//!                        │  │  │ config │ │ logging │ │lifecycle│ │  │
//!                        │  │  └────────┘ └─────────┘ └────────┘ │  │
//!                        │  └────────────────────────────────────┘  │
//!                        └──────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    tracing::info!("analysis-gateway v0.1.0 starting");

    // Load configuration from the environment
    let config = ServiceConfig::from_env()?;

    tracing::info!(
        port = config.listener.port,
        downstream = %config.downstream.base_url,
        downstream_timeout_secs = config.downstream.timeout_secs,
        "Configuration loaded"
    );

    // Bind TCP listener; failure here is fatal
    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
