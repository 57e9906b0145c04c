// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Claude provider for the Retune pipeline.
//!
//! This crate implements [`CompletionProvider`] for the Anthropic Messages
//! API. Both pipeline stages go through the same single-shot completion
//! call; there is no streaming and no retry.

pub mod client;
pub mod types;

use async_trait::async_trait;
use tracing::info;

use retune_config::RetuneConfig;
use retune_core::{
    CompletionProvider, CompletionRequest, CompletionResponse, RetuneError, TokenUsage,
};

use crate::client::AnthropicClient;
use crate::types::{ApiMessage, MessageRequest, ResponseContentBlock};

/// Anthropic Claude provider implementing [`CompletionProvider`].
///
/// API key resolution order: config -> `ANTHROPIC_API_KEY` env var -> error.
pub struct AnthropicProvider {
    client: AnthropicClient,
}

impl AnthropicProvider {
    /// Creates a new Anthropic provider from the given configuration.
    pub fn new(config: &RetuneConfig) -> Result<Self, RetuneError> {
        let api_key = resolve_api_key(&config.anthropic.api_key)?;
        let client = AnthropicClient::new(
            api_key,
            config.anthropic.api_version.clone(),
            config.anthropic.default_model.clone(),
        )?;

        info!(
            model = config.anthropic.default_model,
            "Anthropic provider initialized"
        );

        Ok(Self { client })
    }

    /// Creates a provider with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: AnthropicClient) -> Self {
        Self { client }
    }

    /// Converts a [`CompletionRequest`] to an Anthropic [`MessageRequest`].
    fn to_message_request(request: &CompletionRequest) -> MessageRequest {
        let messages = request
            .messages
            .iter()
            .map(|m| ApiMessage {
                role: m.role.clone(),
                content: m.content.clone(),
            })
            .collect();

        MessageRequest {
            model: request.model.clone(),
            messages,
            system: request.system_prompt.clone(),
            max_tokens: request.max_tokens,
        }
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, RetuneError> {
        let api_request = Self::to_message_request(&request);
        let response = self.client.complete_message(&api_request).await?;

        let content = response
            .content
            .iter()
            .map(|block| match block {
                ResponseContentBlock::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            stop_reason: response.stop_reason,
            usage: TokenUsage {
                input_tokens: response.usage.input_tokens,
                output_tokens: response.usage.output_tokens,
                cache_read_tokens: response.usage.cache_read_input_tokens,
                cache_creation_tokens: response.usage.cache_creation_input_tokens,
            },
        })
    }
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, RetuneError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
        RetuneError::Config(
            "Anthropic API key not found. Set anthropic.api_key in config or the \
             ANTHROPIC_API_KEY environment variable."
                .into(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use retune_core::ChatMessage;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn resolve_api_key_from_config() {
        let result = resolve_api_key(&Some("sk-test-123".into()));
        assert_eq!(result.unwrap(), "sk-test-123");
    }

    #[test]
    fn resolve_api_key_empty_config_falls_back_to_env() {
        let result = resolve_api_key(&Some("".into()));
        // Will fail unless ANTHROPIC_API_KEY is set, which is fine for tests.
        // We just verify it doesn't return the empty string.
        if let Ok(key) = result {
            assert!(!key.is_empty());
        }
    }

    #[test]
    fn resolve_api_key_none_falls_back_to_env() {
        let result = resolve_api_key(&None);
        if let Err(err) = result {
            assert!(err.to_string().contains("API key not found"));
        }
    }

    #[test]
    fn to_message_request_conversion() {
        let request = CompletionRequest {
            model: "claude-sonnet-4-20250514".into(),
            system_prompt: Some("Select relevant keys.".into()),
            messages: vec![ChatMessage::user("Hi")],
            max_tokens: 2048,
        };

        let api_req = AnthropicProvider::to_message_request(&request);
        assert_eq!(api_req.model, "claude-sonnet-4-20250514");
        assert_eq!(api_req.max_tokens, 2048);
        assert_eq!(api_req.system.as_deref(), Some("Select relevant keys."));
        assert_eq!(api_req.messages.len(), 1);
        assert_eq!(api_req.messages[0].role, "user");
        assert_eq!(api_req.messages[0].content, "Hi");
    }

    #[tokio::test]
    async fn complete_joins_text_blocks_and_maps_usage() {
        let server = MockServer::start().await;

        let body = serde_json::json!({
            "id": "msg_join",
            "type": "message",
            "role": "assistant",
            "content": [
                {"type": "text", "text": "[\"hours_"},
                {"type": "text", "text": "per_week\"]"}
            ],
            "model": "claude-sonnet-4-20250514",
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 42, "output_tokens": 7}
        });

        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(serde_json::json!({
                "system": "Select relevant keys.",
                "messages": [{"role": "user", "content": "Hi"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = AnthropicClient::new(
            "test-key".into(),
            "2023-06-01".into(),
            "claude-sonnet-4-20250514".into(),
        )
        .unwrap()
        .with_base_url(server.uri());
        let provider = AnthropicProvider::with_client(client);

        let response = provider
            .complete(CompletionRequest {
                model: "claude-sonnet-4-20250514".into(),
                system_prompt: Some("Select relevant keys.".into()),
                messages: vec![ChatMessage::user("Hi")],
                max_tokens: 1024,
            })
            .await
            .unwrap();

        assert_eq!(response.content, "[\"hours_per_week\"]");
        assert_eq!(response.usage.input_tokens, 42);
        assert_eq!(response.usage.output_tokens, 7);
        assert_eq!(provider.name(), "anthropic");
    }
}
