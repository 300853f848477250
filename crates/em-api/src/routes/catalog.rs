//! Read-only catalog endpoints.

use axum::Json;
use axum::extract::{Path, State};
use em_protocol::catalog::EventRecord;
use em_resolver::normalize;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// One catalog group in the list response.
#[derive(Debug, Serialize)]
pub struct GroupSummary {
    /// Normalized group key.
    pub key: String,
    /// Spelling used by the group's first event.
    pub group_id: Option<String>,
    /// Allow-listed spelling, when the group is on the allow-list.
    pub canonical: Option<&'static str>,
    pub events: usize,
}

/// Response for GET /api/v1/groups.
#[derive(Debug, Serialize)]
pub struct GroupList {
    /// The allow-list offered to the extraction model.
    pub canonical: &'static [&'static str],
    /// Groups present in the loaded catalog, in catalog order.
    pub catalog: Vec<GroupSummary>,
}

/// Response for GET /api/v1/groups/:id.
#[derive(Debug, Serialize)]
pub struct GroupDetail {
    pub key: String,
    pub group_id: Option<String>,
    pub events: Vec<EventRecord>,
}

/// GET /api/v1/events/:id — look up a catalog event.
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> ApiResult<Json<EventRecord>> {
    state
        .catalog
        .lookup_by_event(&event_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("event '{event_id}' not found")))
}

/// GET /api/v1/groups — allow-list plus the groups in the catalog.
pub async fn list_groups(State(state): State<AppState>) -> Json<GroupList> {
    let catalog = state
        .catalog
        .groups()
        .iter()
        .map(|g| {
            let group_id = g.events.first().and_then(|e| e.group_id.clone());
            let canonical = group_id
                .as_deref()
                .and_then(|id| state.groups.canonicalize(id));
            GroupSummary {
                key: g.key.clone(),
                group_id,
                canonical,
                events: g.events.len(),
            }
        })
        .collect();

    Json(GroupList {
        canonical: state.groups.names(),
        catalog,
    })
}

/// GET /api/v1/groups/:id — events of one group, in catalog order.
pub async fn get_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> ApiResult<Json<GroupDetail>> {
    let events = state
        .catalog
        .lookup_by_group(&group_id)
        .ok_or_else(|| ApiError::NotFound(format!("group '{group_id}' not found")))?;

    Ok(Json(GroupDetail {
        key: normalize(&group_id),
        group_id: events.first().and_then(|e| e.group_id.clone()),
        events: events.to_vec(),
    }))
}
