//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /health — liveness check plus catalog and oracle status.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "oracle": state.oracle.provider_name(),
        "catalog": {
            "events": state.catalog.len(),
            "groups": state.catalog.groups().len(),
            "duplicate_event_ids": state.catalog.duplicate_event_ids().len(),
            "loaded_at": state.catalog_loaded_at,
        },
    }))
}
