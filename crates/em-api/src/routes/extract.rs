//! Query extraction endpoint.

use axum::Json;
use axum::extract::State;
use em_protocol::envelope::{ExtractRequest, ExtractResponse};
use em_resolver::{compose, resolve};
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /extract_id — extract and resolve a free-text query.
///
/// One oracle call, then a deterministic catalog resolution. Oracle
/// failures fail the whole request; there is no partial answer.
pub async fn extract_id(
    State(state): State<AppState>,
    Json(req): Json<ExtractRequest>,
) -> ApiResult<Json<ExtractResponse>> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".into()));
    }

    let request_id = Uuid::now_v7();
    let span = tracing::info_span!("extract", %request_id, oracle = state.oracle.provider_name());

    async move {
        let hint = state.oracle.extract(text).await?;
        tracing::debug!(hint = ?hint, "oracle hint");

        let resolved = resolve(&hint, &state.catalog);
        tracing::info!(
            candidate = hint.candidate(),
            event_id = ?resolved.event_id,
            group_id = ?resolved.group_id,
            matched = resolved.is_match(),
            "query resolved"
        );

        Ok::<_, ApiError>(Json(ExtractResponse::ok(compose(&hint, resolved))))
    }
    .instrument(span)
    .await
}
