//! The backend application.
//!
//! Collaborator module exposing the single symbol the launcher needs: a
//! ready-to-run application object. The launcher treats the returned router
//! as opaque and never adds to, inspects, or validates it; everything the
//! process serves is defined here.

use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;

/// Build the application object handed to the launcher.
///
/// The router carries its own middleware. API routes mount here.
pub fn app() -> Router {
    Router::new()
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
