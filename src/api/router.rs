use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, get_member, join_member, list_members};

/// Creates the API router with the member registration endpoints
///
/// - POST /members - Register a new member
/// - GET /members - List members in registration order
/// - GET /members/:id - Get a single member
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/members", post(join_member).get(list_members))
        .route("/members/:id", get(get_member))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
