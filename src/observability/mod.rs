//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Filter configurable through RUST_LOG with a crate-level default
//! - Request IDs attached by the HTTP middleware flow into every event

pub mod logging;
