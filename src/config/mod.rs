//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! environment variables
//!     → env.rs (lookup & parse)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared via Arc with all handlers
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no runtime reload
//! - All fields have defaults so the service starts with no environment set
//! - An unset or empty variable falls back to its default; an unparseable
//!   value is a startup error
//! - Validation separates syntactic (parsing) from semantic checks

pub mod env;
pub mod schema;
pub mod validation;

pub use env::ConfigError;
pub use schema::DownstreamConfig;
pub use schema::ListenerConfig;
pub use schema::ServiceConfig;
