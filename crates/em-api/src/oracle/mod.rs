//! Extraction oracle — turns free-text queries into an `ExtractionHint`.
//!
//! The oracle is a language model behind one of two adapters:
//! - **OpenAI** (`openai`): any OpenAI-compatible chat completions endpoint.
//! - **Bedrock** (`bedrock`): AWS Bedrock Converse API.
//!
//! Either way the model's text goes through [`parse_hint`], which strips
//! Markdown code fences and parses the six expected keys. A single attempt
//! is made per request; any failure is returned to the caller as an
//! [`OracleError`].

pub mod bedrock;
pub mod mock;
pub mod openai;
pub mod prompt;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use em_protocol::hint::ExtractionHint;
use thiserror::Error;

pub use bedrock::BedrockOracle;
pub use mock::StaticOracle;
pub use openai::OpenAiOracle;

use crate::config::{OracleConfig, OracleProvider};

/// Errors from the extraction step.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("extraction model not configured: {0}")]
    NotConfigured(String),

    #[error("extraction request failed: {0}")]
    Request(String),

    #[error("extraction model returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("extraction model timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("extraction model returned no content")]
    EmptyResponse,

    #[error("could not parse extraction output: {message}")]
    Parse { message: String, raw: String },
}

/// Convenience alias for oracle results.
pub type OracleResult<T> = Result<T, OracleError>;

/// Trait for extraction backends.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Extract a structured hint from the user's free text.
    async fn extract(&self, text: &str) -> OracleResult<ExtractionHint>;

    /// Backend name (for logging and the health endpoint).
    fn provider_name(&self) -> &str;
}

/// Stand-in used when no backend could be configured. Every call fails.
pub struct UnconfiguredOracle {
    reason: String,
}

impl UnconfiguredOracle {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl Oracle for UnconfiguredOracle {
    async fn extract(&self, _text: &str) -> OracleResult<ExtractionHint> {
        Err(OracleError::NotConfigured(self.reason.clone()))
    }

    fn provider_name(&self) -> &str {
        "unconfigured"
    }
}

/// Build the configured backend.
///
/// A missing OpenAI key yields an [`UnconfiguredOracle`] so the server can
/// still start and serve the catalog endpoints.
pub async fn build_oracle(config: &OracleConfig) -> Arc<dyn Oracle> {
    match config.provider {
        OracleProvider::Openai => match config.api_key() {
            Some(key) => {
                tracing::info!(
                    key_len = key.len(),
                    model = %config.model,
                    "openai oracle configured"
                );
                Arc::new(OpenAiOracle::new(key, config))
            }
            None => {
                tracing::warn!("OPENAI_API_KEY missing; extraction requests will fail");
                Arc::new(UnconfiguredOracle::new("OPENAI_API_KEY is not set"))
            }
        },
        OracleProvider::Bedrock => {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_bedrockruntime::Client::new(&aws_config);
            tracing::info!(model_id = %config.bedrock_model_id, "bedrock oracle configured");
            Arc::new(BedrockOracle::new(client, config))
        }
    }
}

/// Run `fut`, mapping an elapsed deadline to `OracleError::Timeout`.
pub(crate) async fn with_timeout<T>(
    limit: Duration,
    fut: impl Future<Output = OracleResult<T>>,
) -> OracleResult<T> {
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(OracleError::Timeout {
            timeout_secs: limit.as_secs(),
        }),
    }
}

/// Parse model output into an `ExtractionHint`.
pub fn parse_hint(raw: &str) -> OracleResult<ExtractionHint> {
    let json_str = extract_json(raw);
    if json_str.is_empty() {
        return Err(OracleError::EmptyResponse);
    }
    serde_json::from_str(json_str).map_err(|e| OracleError::Parse {
        message: e.to_string(),
        raw: raw.to_string(),
    })
}

/// Extract JSON from LLM output that may be wrapped in markdown code blocks.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    trimmed
}
