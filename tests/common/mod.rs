//! Shared utilities for integration testing.

use axum::{routing::get, Router};

/// Build a substitute application object that returns a fixed body at `/`.
///
/// Stands in for the real backend so launcher behavior can be tested
/// against any HTTP-serving handle.
pub fn fixed_app(body: &'static str) -> Router {
    Router::new().route("/", get(move || async move { body }))
}
