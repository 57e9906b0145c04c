// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common request/response types shared by the pipeline and provider crates.

use serde::{Deserialize, Serialize};

/// A role-tagged message in a completion exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "user" or "assistant".
    pub role: String,
    /// Plain text content.
    pub content: String,
}

impl ChatMessage {
    /// Creates a user-role message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A single-shot request to a text-generation provider.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,

    /// System instruction for the exchange.
    pub system_prompt: Option<String>,

    /// Conversation messages.
    pub messages: Vec<ChatMessage>,

    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

/// A full response from a text-generation provider.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Response ID assigned by the provider.
    pub id: String,
    /// Concatenated text content of the response.
    pub content: String,
    /// Model that generated the response.
    pub model: String,
    /// Reason the generation stopped.
    pub stop_reason: Option<String>,
    /// Token usage statistics.
    pub usage: TokenUsage,
}

/// Token usage statistics reported by the provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    /// Number of input tokens consumed.
    pub input_tokens: u32,
    /// Number of output tokens generated.
    pub output_tokens: u32,
    /// Number of tokens read from prompt cache.
    pub cache_read_tokens: u32,
    /// Number of tokens written to prompt cache.
    pub cache_creation_tokens: u32,
}
