//! Catalog resolution for the event query resolver.
//!
//! Takes the noisy event/summary hints produced by the extraction model and
//! pins them to a fixed catalog of events and groups: text normalization,
//! an immutable `CatalogIndex`, the ordered event-then-group `resolve` pass,
//! and `compose`, which merges model output with the resolved pair.

pub mod compose;
pub mod error;
pub mod index;
pub mod mock;
pub mod normalize;
pub mod resolve;
pub mod source;

// Re-export key types for convenience
pub use compose::{compose, resolve_answer};
pub use error::{CatalogError, CatalogResult};
pub use index::CatalogIndex;
pub use mock::MockCatalogSource;
pub use normalize::{normalize, normalize_opt};
pub use resolve::resolve;
pub use source::{CatalogSource, FileCatalogSource, load_or_empty};
