//! Shared application state for the Axum server.
//!
//! The catalog index is built once before the router is created and is
//! only ever read afterwards, so handlers share it through an `Arc` with
//! no locking.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use em_protocol::groups::CanonicalGroupSet;
use em_resolver::CatalogIndex;
use em_resolver::mock::sample_events;

use crate::oracle::Oracle;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Immutable event catalog index.
    pub catalog: Arc<CatalogIndex>,
    /// Extraction backend.
    pub oracle: Arc<dyn Oracle>,
    /// Allow-listed group names.
    pub groups: CanonicalGroupSet,
    /// When the catalog was indexed.
    pub catalog_loaded_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(catalog: CatalogIndex, oracle: Arc<dyn Oracle>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            oracle,
            groups: CanonicalGroupSet::standard(),
            catalog_loaded_at: Utc::now(),
        }
    }

    /// State over the built-in sample catalog (development / tests).
    pub fn with_sample_catalog(oracle: Arc<dyn Oracle>) -> Self {
        Self::new(CatalogIndex::build(sample_events()), oracle)
    }
}
