use serde::{Deserialize, Serialize};

/// A single entry of the event catalog.
///
/// Loaded once at startup and never mutated afterwards. Every field except
/// `event_id` is optional in the source file; a record with no id is kept
/// for group membership but can never be matched as an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Unique event identifier (e.g. "flash_flood_advisory_level3").
    #[serde(default)]
    pub event_id: Option<String>,
    /// Human-readable name. Older catalog files call this `event_id_label`.
    #[serde(default, alias = "event_id_label", skip_serializing_if = "Option::is_none")]
    pub event_label: Option<String>,
    /// Parent category the event belongs to (e.g. "flooding", "Snow/Ice").
    #[serde(default)]
    pub group_id: Option<String>,
    /// Alert classification carried by the event ("alert", "warning", "safe").
    #[serde(default)]
    pub alert_status: Option<String>,
}

impl EventRecord {
    pub fn new(event_id: impl Into<String>, group_id: impl Into<String>) -> Self {
        Self {
            event_id: Some(event_id.into()),
            event_label: None,
            group_id: Some(group_id.into()),
            alert_status: None,
        }
    }

    /// Builder-style label setter.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.event_label = Some(label.into());
        self
    }

    /// Builder-style alert status setter.
    pub fn with_alert_status(mut self, status: impl Into<String>) -> Self {
        self.alert_status = Some(status.into());
        self
    }
}
