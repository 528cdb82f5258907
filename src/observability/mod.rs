//! Observability subsystem.
//!
//! Structured logging only; the launcher has no metrics surface of its own.

pub mod logging;
