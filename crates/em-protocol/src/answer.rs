use serde::{Deserialize, Serialize};

/// Final answer for one query: model pass-through fields merged with the
/// catalog-resolved event/group pair.
///
/// All six fields are always serialized; absent values become `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAnswer {
    pub facility_id: Option<String>,
    pub event_id: Option<String>,
    pub group_id: Option<String>,
    #[serde(rename = "alertStatus")]
    pub alert_status: Option<String>,
    pub intent: Option<String>,
    pub summary: Option<String>,
}
