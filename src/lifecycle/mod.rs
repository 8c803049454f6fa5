//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error (config, bind) is fatal
//! - Shutdown reachable from both OS signals and an in-process trigger,
//!   so tests can stop a spawned server deterministically

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
