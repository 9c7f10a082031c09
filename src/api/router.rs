//! Router setup and configuration

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{any, post},
    Router,
};

use crate::api::handlers;
use crate::api::state::AppState;

/// Create the API router
///
/// Ingest routes accept POST only; `/healthz` answers any method.
/// Request bodies are not size limited.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", any(handlers::healthz))
        .route(
            "/iso/pacs008",
            post(handlers::ingest_transfer).fallback(handlers::method_not_allowed),
        )
        .route(
            "/callbacks/hold",
            post(handlers::ingest_hold_callback).fallback(handlers::method_not_allowed),
        )
        .layer(DefaultBodyLimit::disable())
        .with_state(state)
}
