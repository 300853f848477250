//! API route definitions and router builder.

pub mod catalog;
pub mod extract;
pub mod health;

use axum::Router;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/extract", post(extract::extract_id))
        // Catalog browsing
        .route("/events/{id}", get(catalog::get_event))
        .route("/groups", get(catalog::list_groups))
        .route("/groups/{id}", get(catalog::get_group));

    Router::new()
        .route("/health", get(health::health))
        .route("/extract_id", post(extract::extract_id))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
