//! Service health route.

use axum::routing::get;
use axum::{Json, Router};

pub fn routes() -> Router {
    Router::new().route("/health", get(health_check))
}

/// GET /health - liveness probe, always 200.
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "online",
        "service": "PDF Multas Extractor",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
