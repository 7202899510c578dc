//! HTTP route handlers - preserves the wire paths and envelopes of the
//! original extraction microservice.

pub mod extract;
pub mod health;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the main Axum router with all routes.
pub fn build_router() -> Router {
    Router::new()
        .merge(health::routes())
        .merge(extract::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
