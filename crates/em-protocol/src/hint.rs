use serde::{Deserialize, Serialize};

/// Best-effort structured guess returned by the extraction model.
///
/// Every field is optional and unvalidated. The model is told to use the
/// key `alertStatus`; `alert_status` is accepted as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionHint {
    #[serde(default)]
    pub facility_id: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default, rename = "alertStatus", alias = "alert_status")]
    pub alert_status: Option<String>,
    /// Query classification: "ALL", "SUBSCRIBED" or "SPECIFIC".
    #[serde(default)]
    pub intent: Option<String>,
    /// Short plain-English restatement of the query.
    #[serde(default)]
    pub summary: Option<String>,
}

impl ExtractionHint {
    /// The phrase to resolve against the catalog: the event guess when it is
    /// non-empty, otherwise the summary, otherwise the empty string.
    pub fn candidate(&self) -> &str {
        non_empty(self.event_id.as_deref())
            .or_else(|| non_empty(self.summary.as_deref()))
            .unwrap_or("")
    }

    /// The model's alert status, ignoring blank strings.
    pub fn alert_status(&self) -> Option<&str> {
        self.alert_status
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Catalog-derived fields produced by hint resolution.
///
/// `event_id` and `group_id` always come from the same catalog record, or
/// are both taken from a group's first record with `event_id` left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedFields {
    pub event_id: Option<String>,
    pub group_id: Option<String>,
    #[serde(rename = "alertStatus")]
    pub alert_status: Option<String>,
}

impl ResolvedFields {
    /// Nothing matched.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        self.event_id.is_some() || self.group_id.is_some()
    }
}
