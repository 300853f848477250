//! E2E tests for the extraction flow: model output → resolution → answer.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestHarness;

/// The canonical flash-flood query resolves to the catalog's pairing and
/// inherits the catalog alert status.
#[tokio::test]
async fn e2e_flash_flood_specific_facility() {
    let h = TestHarness::with_catalog().await;
    h.model_replies(
        r#"{"event_id": "flash_flood_advisory_level3", "facility_id": "GREAT_FALLS_100", "intent": "SPECIFIC", "summary": "..."}"#,
    )
    .await;

    let (status, json) = h
        .extract("show me flash flood advisory for GREAT_FALLS_100")
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "success": true,
            "data": {
                "facility_id": "GREAT_FALLS_100",
                "event_id": "flash_flood_advisory_level3",
                "group_id": "flooding",
                "alertStatus": "alert",
                "intent": "SPECIFIC",
                "summary": "..."
            }
        })
    );
    assert_eq!(h.model_calls().await, 1);
}

/// A fenced answer from the model is still understood.
#[tokio::test]
async fn e2e_fenced_model_output() {
    let h = TestHarness::with_catalog().await;
    h.model_replies(
        "```json\n{\"facility_id\": \"NV1\", \"event_id\": \"Heavy Rain\", \"intent\": \"SPECIFIC\"}\n```",
    )
    .await;

    let (status, json) = h.extract("heavy rain at NV1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["event_id"], "heavy_rain_level3");
    assert_eq!(json["data"]["group_id"], "Rain");
}

/// The model's alert status overrides the catalog's.
#[tokio::test]
async fn e2e_model_alert_status_wins() {
    let h = TestHarness::with_catalog().await;
    h.model_replies(r#"{"event_id": "low_temperature_1", "alertStatus": "alert"}"#)
        .await;

    let (_, json) = h.extract("low temperature alerts").await;
    assert_eq!(json["data"]["event_id"], "low_temperature_1");
    assert_eq!(json["data"]["alertStatus"], "alert");
}

/// A wrong model group is replaced by the resolved event's real group.
#[tokio::test]
async fn e2e_model_group_never_trusted() {
    let h = TestHarness::with_catalog().await;
    h.model_replies(r#"{"event_id": "freezing rain", "group_id": "Rain"}"#)
        .await;

    let (_, json) = h.extract("freezing rain").await;
    assert_eq!(json["data"]["event_id"], "freezing_rain_1");
    assert_eq!(json["data"]["group_id"], "Snow/Ice");
}

/// Group-only hints resolve to the group's first event's spelling and status.
#[tokio::test]
async fn e2e_group_fallback_first_event() {
    let h = TestHarness::with_catalog().await;
    h.model_replies(r#"{"event_id": "snow/ice", "intent": "ALL"}"#)
        .await;

    let (_, json) = h.extract("all snow ice events").await;
    assert!(json["data"]["event_id"].is_null());
    assert_eq!(json["data"]["group_id"], "Snow/Ice");
    assert_eq!(json["data"]["alertStatus"], "alert");
}

/// With no event guess, the summary is used as the hint.
#[tokio::test]
async fn e2e_summary_used_as_hint() {
    let h = TestHarness::with_catalog().await;
    h.model_replies(r#"{"event_id": null, "summary": "shake alert"}"#)
        .await;

    let (_, json) = h.extract("earthquakes near abc2").await;
    assert!(json["data"]["event_id"].is_null());
    assert_eq!(json["data"]["group_id"], "shake_alert");
    assert!(json["data"]["alertStatus"].is_null());
}

/// An all-null model answer resolves to all-null catalog fields.
#[tokio::test]
async fn e2e_all_null_answer() {
    let h = TestHarness::with_catalog().await;
    h.model_replies(
        r#"{"facility_id": null, "event_id": null, "group_id": null, "alertStatus": null, "intent": null, "summary": null}"#,
    )
    .await;

    let (status, json) = h.extract("hello").await;
    assert_eq!(status, StatusCode::OK);
    let data = json["data"].as_object().unwrap();
    assert_eq!(data.len(), 6);
    assert!(data.values().all(|v| v.is_null()));
}

/// Every resolved event carries exactly its catalog group, including when
/// the catalog repeats an id.
#[tokio::test]
async fn e2e_resolved_pairs_are_consistent() {
    let duplicated = r#"[
        {"event_id": "wind_1", "event_id_label": "Gust Front", "group_id": "wind", "alert_status": "safe"},
        {"event_id": "Wind 1", "group_id": "wind_gusts", "alert_status": "alert"},
        {"event_id": "rain_1", "group_id": "Rain"}
    ]"#;
    let cases: [(&str, &[&str]); 2] = [
        (
            helpers::CATALOG_JSON,
            &[
                "flash flood",
                "rain",
                "heavy rain",
                "Freezing-Rain",
                "black ice 1",
                "temperature",
                "quake",
            ],
        ),
        (duplicated, &["wind_1", "WIND-1", "gust front", "wind", "rain"]),
    ];

    for (catalog, hints) in cases {
        for &hint in hints {
            let h = TestHarness::with_catalog_contents(catalog).await;
            h.model_replies(&json!({ "event_id": hint }).to_string())
                .await;

            let (status, json) = h.extract(hint).await;
            assert_eq!(status, StatusCode::OK);
            let data = &json["data"];
            if let Some(event_id) = data["event_id"].as_str() {
                let record = h.catalog.lookup_by_event(event_id).unwrap();
                assert_eq!(
                    data["group_id"].as_str(),
                    record.group_id.as_deref(),
                    "mismatched pair for hint {hint:?}"
                );

                let uri = format!("/api/v1/events/{}", event_id.replace(' ', "%20"));
                let (status, served) = h.get(&uri).await;
                assert_eq!(status, StatusCode::OK);
                assert_eq!(served["group_id"], data["group_id"], "hint {hint:?}");
            }
        }
    }
}
