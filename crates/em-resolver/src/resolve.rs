//! Hint resolution — map a noisy event/summary phrase onto the catalog.
//!
//! Two ordered passes, first match wins:
//! 1. **Event pass** over records in catalog order: the candidate equals the
//!    normalized id, equals the normalized label, or is a substring of it.
//!    A record shadowed by a later duplicate id never matches.
//! 2. **Group pass** over group keys in first-appearance order: the candidate
//!    equals the key or is a substring of it. Yields the group's first record
//!    with no event id.
//!
//! Ambiguous substrings are not an error; catalog order decides.

use em_protocol::hint::{ExtractionHint, ResolvedFields};

use crate::index::{CatalogGroup, CatalogIndex, EventKeys};
use crate::normalize::normalize;

/// Resolve a model hint into a catalog-consistent event/group pair.
pub fn resolve(hint: &ExtractionHint, index: &CatalogIndex) -> ResolvedFields {
    let candidate = normalize(hint.candidate());
    // Every string contains "", so an empty candidate would match anything.
    if candidate.is_empty() {
        return ResolvedFields::none();
    }

    if let Some((_, record)) = index
        .event_keys()
        .find(|(keys, _)| event_matches(&candidate, keys))
    {
        tracing::debug!(
            candidate = %candidate,
            event_id = ?record.event_id,
            "hint resolved to event"
        );
        return ResolvedFields {
            event_id: record.event_id.clone(),
            group_id: record.group_id.clone(),
            alert_status: record.alert_status.clone(),
        };
    }

    if let Some((group, first)) = index
        .groups()
        .iter()
        .filter(|g| group_matches(&candidate, g))
        .find_map(|g| g.events.first().map(|first| (g, first)))
    {
        tracing::debug!(
            candidate = %candidate,
            group = %group.key,
            "hint resolved to group"
        );
        return ResolvedFields {
            event_id: None,
            group_id: first.group_id.clone(),
            alert_status: first.alert_status.clone(),
        };
    }

    tracing::debug!(candidate = %candidate, "hint matched nothing in catalog");
    ResolvedFields::none()
}

fn event_matches(candidate: &str, keys: &EventKeys) -> bool {
    candidate == keys.id || (!keys.label.is_empty() && keys.label.contains(candidate))
}

// Keys are normalized and non-empty by construction.
fn group_matches(candidate: &str, group: &CatalogGroup) -> bool {
    group.key.contains(candidate)
}
