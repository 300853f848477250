//! Catalog loading error types.

use thiserror::Error;

/// Errors that can occur while loading the event catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("malformed catalog {source_name}: {message}")]
    Malformed {
        source_name: String,
        message: String,
    },
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
