//! Route definitions for the Aliment HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/items",
            get(handlers::aliment::list_aliments).put(handlers::aliment::create_aliment),
        )
        .route(
            "/items/{id}",
            get(handlers::aliment::get_aliment)
                .put(handlers::aliment::update_aliment)
                .delete(handlers::aliment::delete_aliment),
        )
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
