//! Mock catalog source for testing — serves a pre-loaded record list.

use async_trait::async_trait;
use em_protocol::catalog::EventRecord;

use crate::error::{CatalogError, CatalogResult};
use crate::source::CatalogSource;

/// A catalog source that returns fixed records, or fails on demand.
pub struct MockCatalogSource {
    events: Vec<EventRecord>,
    fail: bool,
}

impl MockCatalogSource {
    pub fn new(events: Vec<EventRecord>) -> Self {
        Self {
            events,
            fail: false,
        }
    }

    /// A source whose every load fails with `CatalogError::Malformed`.
    pub fn failing() -> Self {
        Self {
            events: Vec::new(),
            fail: true,
        }
    }

    /// A small weather catalog covering several groups.
    pub fn with_sample_catalog() -> Self {
        Self::new(sample_events())
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn load(&self) -> CatalogResult<Vec<EventRecord>> {
        if self.fail {
            return Err(CatalogError::Malformed {
                source_name: self.describe(),
                message: "simulated failure".into(),
            });
        }
        Ok(self.events.clone())
    }

    fn describe(&self) -> String {
        "mock".into()
    }
}

/// Sample records used by tests and the development server.
pub fn sample_events() -> Vec<EventRecord> {
    vec![
        EventRecord::new("flash_flood_advisory_level3", "flooding")
            .with_label("Flash Flood Advisory")
            .with_alert_status("alert"),
        EventRecord::new("flood_watch_level1", "flooding")
            .with_label("Flood Watch")
            .with_alert_status("warning"),
        EventRecord::new("rain_advisory_level2", "Rain")
            .with_label("Rain Advisory")
            .with_alert_status("warning"),
        EventRecord::new("heavy_rain_level3", "Rain")
            .with_label("Heavy Rain")
            .with_alert_status("alert"),
        EventRecord::new("low_temperature_1", "temperature")
            .with_label("Low Temperature")
            .with_alert_status("warning"),
        EventRecord::new("freezing_rain_1", "Snow/Ice")
            .with_label("Freezing Rain")
            .with_alert_status("alert"),
        EventRecord::new("black_ice_1", "Snow/Ice")
            .with_label("Black Ice")
            .with_alert_status("warning"),
        EventRecord::new("gusts_over_40", "wind_gusts")
            .with_label("Gusts Over 40 MPH")
            .with_alert_status("warning"),
        EventRecord::new("all_clear", "Non Weather")
            .with_label("All Clear")
            .with_alert_status("safe"),
    ]
}
