//! Backend application launcher.
//!
//! # Architecture Overview
//!
//! ```text
//!   PORT (environment)          backend::app()
//!         │                           │
//!         ▼                           ▼
//!   config::from_env ────▶ http::HttpServer ────▶ 0.0.0.0:<port>
//!                                     │
//!                                     ▼
//!                      lifecycle (Ctrl+C / SIGTERM / trigger)
//! ```
//!
//! The launcher owns exactly one configuration value (the listen port) and
//! one resource (the listening socket). Everything the process serves is
//! defined by the backend module's application object, which the launcher
//! treats as opaque.

// Core subsystems
pub mod backend;
pub mod config;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::LauncherConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
