//! Shared test harness for E2E integration tests.
//!
//! Wires a real catalog file, the real `OpenAiOracle` pointed at a wiremock
//! server, and the real router, so every request crosses all crate
//! boundaries.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use em_api::config::OracleConfig;
use em_api::oracle::OpenAiOracle;
use em_api::routes::build_router;
use em_api::state::AppState;
use em_resolver::{CatalogIndex, FileCatalogSource, load_or_empty};

static FILE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Catalog used by most suites, in the on-disk JSON format.
pub const CATALOG_JSON: &str = r#"[
    {"event_id": "flash_flood_advisory_level3", "event_id_label": "Flash Flood Advisory", "group_id": "flooding", "alert_status": "alert"},
    {"event_id": "rain_advisory_level2", "event_id_label": "Rain Advisory", "group_id": "Rain", "alert_status": "warning"},
    {"event_id": "heavy_rain_level3", "event_id_label": "Heavy Rain", "group_id": "Rain", "alert_status": "alert"},
    {"event_id": "low_temperature_1", "event_id_label": "Low Temperature", "group_id": "temperature", "alert_status": "warning"},
    {"event_id": "freezing_rain_1", "event_id_label": "Freezing Rain", "group_id": "Snow/Ice", "alert_status": "alert"},
    {"event_id": "black_ice_1", "group_id": "Snow/Ice", "alert_status": "warning"},
    {"event_id": "quake_alert_1", "group_id": "shake_alert"}
]"#;

/// End-to-end harness: mock model endpoint + catalog + router.
pub struct TestHarness {
    /// Mock OpenAI-compatible server.
    pub server: MockServer,
    /// Router over the real application state.
    pub router: Router,
    /// The catalog the router resolves against.
    pub catalog: Arc<CatalogIndex>,
}

impl TestHarness {
    /// Harness over [`CATALOG_JSON`], loaded through a temp file.
    pub async fn with_catalog() -> Self {
        let path = write_temp_catalog(CATALOG_JSON).await;
        let harness = Self::from_catalog_path(&path).await;
        let _ = tokio::fs::remove_file(&path).await;
        harness
    }

    /// Harness whose catalog path points at a file that does not exist.
    pub async fn with_missing_catalog() -> Self {
        Self::from_catalog_path(Path::new("/nonexistent/em-e2e/events.json")).await
    }

    /// Harness over arbitrary catalog file contents.
    pub async fn with_catalog_contents(contents: &str) -> Self {
        let path = write_temp_catalog(contents).await;
        let harness = Self::from_catalog_path(&path).await;
        let _ = tokio::fs::remove_file(&path).await;
        harness
    }

    async fn from_catalog_path(path: &Path) -> Self {
        let server = MockServer::start().await;
        let catalog = load_or_empty(&FileCatalogSource::new(path.to_string_lossy())).await;

        let config = OracleConfig {
            base_url: format!("{}/v1", server.uri()),
            timeout_secs: 2,
            ..OracleConfig::default()
        };
        let oracle = Arc::new(OpenAiOracle::new("sk-e2e", &config));

        let state = AppState::new(catalog, oracle);
        let catalog = state.catalog.clone();
        Self {
            server,
            router: build_router(state),
            catalog,
        }
    }

    /// Make the mock model answer every chat request with `content`.
    pub async fn model_replies(&self, content: &str) {
        let body = serde_json::json!({
            "id": "chatcmpl-e2e",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        });
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Make the mock model answer every chat request with a raw response.
    pub async fn model_responds_with(&self, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// POST /extract_id. Returns (HTTP status code, response JSON body).
    pub async fn extract(&self, text: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "text": text });
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post("/extract_id")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    /// GET an arbitrary path. Returns (HTTP status code, response JSON body).
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    /// Number of requests the mock model received.
    pub async fn model_calls(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

async fn write_temp_catalog(contents: &str) -> PathBuf {
    let n = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "em-e2e-{}-{n}-events.json",
        std::process::id()
    ));
    tokio::fs::write(&path, contents).await.unwrap();
    path
}
