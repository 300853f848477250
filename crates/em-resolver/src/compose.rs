//! Merge the model's raw guess with the catalog-resolved fields.

use em_protocol::answer::ResolvedAnswer;
use em_protocol::hint::{ExtractionHint, ResolvedFields};

use crate::index::CatalogIndex;
use crate::resolve::resolve;

/// Compose the final answer.
///
/// `facility_id`, `intent` and `summary` pass through untouched. The model's
/// alert status wins when present, the catalog's otherwise. `event_id` and
/// `group_id` are only ever taken from `resolved`.
pub fn compose(hint: &ExtractionHint, resolved: ResolvedFields) -> ResolvedAnswer {
    let alert_status = hint
        .alert_status()
        .map(str::to_string)
        .or(resolved.alert_status);

    ResolvedAnswer {
        facility_id: hint.facility_id.clone(),
        event_id: resolved.event_id,
        group_id: resolved.group_id,
        alert_status,
        intent: hint.intent.clone(),
        summary: hint.summary.clone(),
    }
}

/// Resolve `hint` against `index` and compose the answer in one step.
pub fn resolve_answer(hint: &ExtractionHint, index: &CatalogIndex) -> ResolvedAnswer {
    compose(hint, resolve(hint, index))
}
