//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Init logging → Resolve config → Bind listener → Serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl+C / SIGTERM / Shutdown::trigger → serve loop drains → exit 0
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, exit is non-zero
//! - Shutdown sources race; first one wins

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
