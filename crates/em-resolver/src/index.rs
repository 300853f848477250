//! Immutable lookup structures over the event catalog.
//!
//! Built once at startup and shared by reference (typically behind an `Arc`)
//! with every request. There is no write path after construction.

use std::collections::HashMap;

use em_protocol::catalog::EventRecord;

use crate::normalize::{normalize, normalize_opt};

/// One group of the catalog: its normalized key and member records.
#[derive(Debug, Clone)]
pub struct CatalogGroup {
    /// Normalized `group_id` shared by every member.
    pub key: String,
    /// Member records in catalog order.
    pub events: Vec<EventRecord>,
}

/// Normalized match keys of a record that owns its event id.
#[derive(Debug, Clone)]
pub struct EventKeys {
    /// Normalized `event_id`; never empty.
    pub id: String,
    /// Normalized `event_label`; empty when the record has none.
    pub label: String,
    position: usize,
}

/// Lookup index over the event catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    /// All records in source order, including ones without an id or group.
    records: Vec<EventRecord>,
    /// Normalized event id -> position in `records` (last write wins).
    by_event: HashMap<String, usize>,
    /// Groups in first-appearance order.
    groups: Vec<CatalogGroup>,
    /// Normalized group key -> position in `groups`.
    by_group: HashMap<String, usize>,
    /// Owners of `by_event` entries, in catalog order.
    event_keys: Vec<EventKeys>,
    /// Normalized ids that appeared more than once.
    duplicates: Vec<String>,
}

impl CatalogIndex {
    /// Build the index from catalog records, preserving their order.
    pub fn build(events: Vec<EventRecord>) -> Self {
        let mut by_event = HashMap::new();
        let mut groups: Vec<CatalogGroup> = Vec::new();
        let mut by_group: HashMap<String, usize> = HashMap::new();
        let mut duplicates = Vec::new();

        for (pos, record) in events.iter().enumerate() {
            let id = normalize(record.event_id.as_deref().unwrap_or_default());
            if !id.is_empty() && by_event.insert(id.clone(), pos).is_some() {
                duplicates.push(id);
            }

            let key = normalize(record.group_id.as_deref().unwrap_or_default());
            if key.is_empty() {
                continue;
            }
            match by_group.get(&key) {
                Some(&slot) => groups[slot].events.push(record.clone()),
                None => {
                    by_group.insert(key.clone(), groups.len());
                    groups.push(CatalogGroup {
                        key,
                        events: vec![record.clone()],
                    });
                }
            }
        }

        // Shadowed duplicates are left out so matching agrees with lookup.
        let event_keys = events
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                let id = normalize_opt(record.event_id.as_deref());
                (by_event.get(&id) == Some(&position)).then(|| EventKeys {
                    id,
                    label: normalize_opt(record.event_label.as_deref()),
                    position,
                })
            })
            .collect();

        if !duplicates.is_empty() {
            tracing::warn!(
                count = duplicates.len(),
                ids = ?duplicates,
                "catalog contains duplicate event ids; later entries win on lookup"
            );
        }

        Self {
            records: events,
            by_event,
            groups,
            by_group,
            event_keys,
            duplicates,
        }
    }

    /// An index with no records; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a record by event id. The argument is normalized first.
    pub fn lookup_by_event(&self, event_id: &str) -> Option<&EventRecord> {
        self.by_event
            .get(&normalize(event_id))
            .map(|&pos| &self.records[pos])
    }

    /// Look up a group's members by group id. The argument is normalized first.
    pub fn lookup_by_group(&self, group_id: &str) -> Option<&[EventRecord]> {
        self.by_group
            .get(&normalize(group_id))
            .map(|&slot| self.groups[slot].events.as_slice())
    }

    /// All records in catalog order.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Records that can be matched by event, in catalog order, paired with
    /// their precomputed keys. Records without an id and shadowed duplicates
    /// are absent.
    pub fn event_keys(&self) -> impl Iterator<Item = (&EventKeys, &EventRecord)> {
        self.event_keys
            .iter()
            .map(|keys| (keys, &self.records[keys.position]))
    }

    /// All groups in first-appearance order.
    pub fn groups(&self) -> &[CatalogGroup] {
        &self.groups
    }

    /// Normalized event ids that occurred more than once in the source.
    pub fn duplicate_event_ids(&self) -> &[String] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
