//! Unified API error type with Axum `IntoResponse` support.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::oracle::OracleError;

/// API error type that converts to proper HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Oracle(OracleError::NotConfigured(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Oracle(OracleError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Oracle(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Oracle(e) = &self {
            match e {
                OracleError::Parse { raw, .. } => {
                    tracing::warn!(error = %e, raw = %raw, "extraction failed");
                }
                OracleError::Status { body, .. } => {
                    tracing::warn!(error = %e, body = %body, "extraction failed");
                }
                _ => tracing::warn!(error = %e, "extraction failed"),
            }
        }

        let body = json!({
            "success": false,
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Convenience alias.
pub type ApiResult<T> = Result<T, ApiError>;
