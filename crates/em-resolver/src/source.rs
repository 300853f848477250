//! Catalog source abstraction — read event records from a file, a mock, or
//! another backend.

use async_trait::async_trait;
use em_protocol::catalog::EventRecord;

use crate::error::{CatalogError, CatalogResult};
use crate::index::CatalogIndex;

/// Abstraction over where the event catalog comes from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every record, in source order.
    async fn load(&self) -> CatalogResult<Vec<EventRecord>>;

    /// Human-readable description for logs (e.g. the file path).
    fn describe(&self) -> String;
}

/// Reads a JSON array of event records from the local filesystem.
pub struct FileCatalogSource {
    path: String,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn load(&self) -> CatalogResult<Vec<EventRecord>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::NotFound(self.path.clone())
            } else {
                CatalogError::Io(format!("{}: {e}", self.path))
            }
        })?;
        parse_catalog(&content, &self.path)
    }

    fn describe(&self) -> String {
        self.path.clone()
    }
}

/// Parse catalog JSON (an array of event records).
pub fn parse_catalog(content: &str, source_name: &str) -> CatalogResult<Vec<EventRecord>> {
    serde_json::from_str(content).map_err(|e| CatalogError::Malformed {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

/// Load and index the catalog, degrading to an empty index on failure.
///
/// A broken catalog must not take the service down: the failure is logged
/// once and every lookup then reports "not found".
pub async fn load_or_empty(source: &dyn CatalogSource) -> CatalogIndex {
    match source.load().await {
        Ok(events) => {
            let index = CatalogIndex::build(events);
            tracing::info!(
                source = %source.describe(),
                events = index.len(),
                groups = index.groups().len(),
                "event catalog loaded"
            );
            index
        }
        Err(e) => {
            tracing::warn!(
                source = %source.describe(),
                error = %e,
                "failed to load event catalog, continuing with an empty catalog"
            );
            CatalogIndex::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockCatalogSource;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("em-resolver-{}-{name}", std::process::id()))
    }

    #[test]
    fn parse_valid_array() {
        let json = r#"[
            {"event_id": "rain_1", "group_id": "Rain", "alert_status": "warning"},
            {"event_id": "hail_1", "event_id_label": "Hail", "group_id": "hail"}
        ]"#;
        let events = parse_catalog(json, "inline").unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].event_label.as_deref(), Some("Hail"));
    }

    #[test]
    fn parse_rejects_non_array() {
        let err = parse_catalog(r#"{"event_id": "rain_1"}"#, "inline").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
        assert!(err.to_string().contains("inline"));
    }

    #[tokio::test]
    async fn file_source_reads_catalog() {
        let path = temp_path("ok.json");
        tokio::fs::write(&path, r#"[{"event_id": "wind_1", "group_id": "wind"}]"#)
            .await
            .unwrap();

        let source = FileCatalogSource::new(path.to_string_lossy());
        let events = source.load().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_id.as_deref(), Some("wind_1"));

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn file_source_missing_file() {
        let source = FileCatalogSource::new("/nonexistent/events.json");
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
        assert_eq!(source.describe(), "/nonexistent/events.json");
    }

    #[tokio::test]
    async fn malformed_file_degrades_to_empty() {
        let path = temp_path("bad.json");
        tokio::fs::write(&path, "not json at all").await.unwrap();

        let index = load_or_empty(&FileCatalogSource::new(path.to_string_lossy())).await;
        assert!(index.is_empty());
        assert!(index.lookup_by_event("rain_1").is_none());

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_degrades_to_empty() {
        let index = load_or_empty(&FileCatalogSource::new("/nonexistent/events.json")).await;
        assert!(index.is_empty());
    }

    #[tokio::test]
    async fn mock_source_builds_index() {
        let index = load_or_empty(&MockCatalogSource::with_sample_catalog()).await;
        assert!(!index.is_empty());
        assert!(index.lookup_by_event("flash_flood_advisory_level3").is_some());
    }
}
