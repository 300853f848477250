//! Instruction prompt shared by every extraction backend.

use em_protocol::groups::CanonicalGroupSet;

const INSTRUCTIONS: &str = r#"You extract structured information from user queries about monitored facilities and weather/alert events.

Rules:
1. facility_id: a user-provided identifier such as GREAT_FALLS_100, NV1 or abc2. Replace spaces with underscores. Use CURRENT_LOCATION only when the user explicitly says "current location". Otherwise null.
2. event_id: a specific catalog event such as flash_flood_advisory_level3, low_temperature_1 or rain_advisory_level2. Null if no specific event is named.
3. group_id: must be one of {GROUPS}. When an event is named, use its parent category. Match even when the user writes spaces instead of underscores or separators (e.g. "snow ice" -> "Snow/Ice").
4. alertStatus: one of "alert", "warning", "safe", or null, based on the user's wording.
5. intent:
   - "ALL" if the user asks for all IDs
   - "SUBSCRIBED" if the user asks for their own or subscribed IDs
   - "SPECIFIC" if the user names specific facility IDs
6. summary: a short plain-English restatement of the request.

Facility, event and group are independent; any of them may be present or absent. User input may not match exactly: handle synonyms, spacing, capitalization and small typos.

Respond with ONLY a JSON object (no markdown, no explanation) with exactly these keys:
facility_id, event_id, group_id, alertStatus, intent, summary

Example input: "show me flash flood advisory for GREAT_FALLS_100"
Example output:
{"facility_id": "GREAT_FALLS_100", "event_id": "flash_flood_advisory_level3", "group_id": "flooding", "alertStatus": "alert", "intent": "SPECIFIC", "summary": "User requests flash flood advisory for facility GREAT_FALLS_100."}

Example input: "show all warnings for abc2"
Example output:
{"facility_id": "abc2", "event_id": null, "group_id": null, "alertStatus": "warning", "intent": "ALL", "summary": "User requests all warnings related to abc2."}"#;

/// Build the system prompt with the group allow-list filled in.
pub fn system_prompt(groups: &CanonicalGroupSet) -> String {
    let list = groups
        .names()
        .iter()
        .map(|g| format!("\"{g}\""))
        .collect::<Vec<_>>()
        .join(", ");
    INSTRUCTIONS.replace("{GROUPS}", &format!("[{list}]"))
}
