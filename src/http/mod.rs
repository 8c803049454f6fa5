//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware.rs (access log: method, path, remote address)
//!     → handlers.rs (status / health / process)
//!       or relay.rs (/analyze → downstream service)
//!     → response.rs (envelope construction, JSON encoding)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod relay;
pub mod response;
pub mod server;

pub use response::{Envelope, SERVICE_NAME};
pub use server::{AppState, HttpServer};
