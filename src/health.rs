//! Liveness probe

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Creates the health router
///
/// # Routes
/// - `GET /health` - Liveness probe
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
