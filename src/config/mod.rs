//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT)
//!     → env.rs (read & parse)
//!     → LauncherConfig (resolved, immutable)
//!     → passed explicitly to the server
//! ```
//!
//! # Design Decisions
//! - Environment access happens exactly once, at startup, in `from_env`
//! - Parsing is a pure function so resolution rules are unit-testable
//! - A malformed value is fatal; the default only covers absence

pub mod env;
pub mod schema;

pub use env::ConfigError;
pub use schema::LauncherConfig;
