use serde::{Deserialize, Serialize};

use crate::answer::ResolvedAnswer;

/// Request body for `POST /extract_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// Free-text user query.
    #[serde(default)]
    pub text: String,
}

/// Success envelope returned by `POST /extract_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub data: ResolvedAnswer,
}

impl ExtractResponse {
    pub fn ok(data: ResolvedAnswer) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
