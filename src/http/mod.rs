//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! backend::app() (opaque Router)
//!     → server.rs (bind 0.0.0.0:<port>, serve loop)
//!     → connections dispatched to the application
//!     → loop drains on shutdown signal
//! ```

pub mod server;

pub use server::{HttpServer, ServerError};
