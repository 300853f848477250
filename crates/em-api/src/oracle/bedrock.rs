//! AWS Bedrock oracle — Converse API with the shared extraction prompt.
//!
//! Uses the model-agnostic Converse API (works with Nova Lite, Claude, etc.).

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, ConverseOutput, Message, SystemContentBlock,
};
use em_protocol::groups::CanonicalGroupSet;
use em_protocol::hint::ExtractionHint;

use super::{Oracle, OracleError, OracleResult, parse_hint, prompt, with_timeout};
use crate::config::OracleConfig;

/// Bedrock Converse API extraction backend.
pub struct BedrockOracle {
    client: BedrockClient,
    model_id: String,
    timeout: Duration,
    system_prompt: String,
}

impl BedrockOracle {
    /// Create a new oracle with a pre-built Bedrock client.
    pub fn new(client: BedrockClient, config: &OracleConfig) -> Self {
        Self {
            client,
            model_id: config.bedrock_model_id.clone(),
            timeout: config.timeout(),
            system_prompt: prompt::system_prompt(&CanonicalGroupSet::standard()),
        }
    }

    /// Call the Converse API and return the first text block.
    async fn call_converse(&self, text: &str) -> OracleResult<String> {
        let user_message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(text.to_string()))
            .build()
            .map_err(|e| OracleError::Request(format!("failed to build message: {e}")))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(self.system_prompt.clone()))
            .messages(user_message)
            .send()
            .await
            .map_err(|e| OracleError::Request(format!("bedrock converse error: {e}")))?;

        let Some(ConverseOutput::Message(msg)) = response.output() else {
            return Err(OracleError::EmptyResponse);
        };

        first_text(msg.content()).ok_or(OracleError::EmptyResponse)
    }
}

#[async_trait]
impl Oracle for BedrockOracle {
    async fn extract(&self, text: &str) -> OracleResult<ExtractionHint> {
        let raw = with_timeout(self.timeout, self.call_converse(text)).await?;
        tracing::debug!(raw = %raw, model_id = %self.model_id, "bedrock extraction output");
        parse_hint(&raw)
    }

    fn provider_name(&self) -> &str {
        "bedrock"
    }
}

fn first_text(blocks: &[ContentBlock]) -> Option<String> {
    blocks.iter().find_map(|block| match block {
        ContentBlock::Text(t) => Some(t.clone()),
        _ => None,
    })
}
