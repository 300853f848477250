//! OpenAI-compatible chat completions oracle.
//!
//! Sends the fixed instruction prompt plus the user's text to
//! `{base_url}/chat/completions` and parses the first choice.

use std::time::Duration;

use async_trait::async_trait;
use em_protocol::groups::CanonicalGroupSet;
use em_protocol::hint::ExtractionHint;
use serde::{Deserialize, Serialize};

use super::{Oracle, OracleError, OracleResult, parse_hint, prompt, with_timeout};
use crate::config::OracleConfig;

/// Chat completions request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat completions response (only fields we need).
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat endpoint.
pub struct OpenAiOracle {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
    timeout: Duration,
    system_prompt: String,
}

impl OpenAiOracle {
    pub fn new(api_key: impl Into<String>, config: &OracleConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: config.model.clone(),
            endpoint: format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            timeout: config.timeout(),
            system_prompt: prompt::system_prompt(&CanonicalGroupSet::standard()),
        }
    }

    async fn call_chat(&self, text: &str) -> OracleResult<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature: 0.0,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| OracleError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Request(format!("invalid response body: {e}")))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(OracleError::EmptyResponse)
    }
}

#[async_trait]
impl Oracle for OpenAiOracle {
    async fn extract(&self, text: &str) -> OracleResult<ExtractionHint> {
        let raw = with_timeout(self.timeout, self.call_chat(text)).await?;
        tracing::debug!(raw = %raw, "openai extraction output");
        parse_hint(&raw)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
