// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! First pipeline stage: select the settings keys relevant to a request.

use std::sync::Arc;

use tracing::{debug, info, warn};

use retune_core::{
    ChatMessage, CompletionProvider, CompletionRequest, RetuneError, Settings,
};

use crate::cleanup::strip_code_fences;
use crate::orchestrator::PipelineOptions;
use crate::prompt;

/// Selects which settings keys a free-text request is judged to affect.
pub struct KeyExtractor {
    provider: Arc<dyn CompletionProvider>,
    options: PipelineOptions,
}

impl KeyExtractor {
    pub fn new(provider: Arc<dyn CompletionProvider>, options: PipelineOptions) -> Self {
        Self { provider, options }
    }

    /// Asks the provider for the relevant key list and validates it against
    /// the settings document.
    ///
    /// An unparseable response (invalid JSON, or JSON that is not an array
    /// of strings) degrades to an empty list, never an error. A response
    /// naming keys outside the document fails with
    /// [`RetuneError::UnknownKeys`].
    pub async fn analyze(
        &self,
        settings: &Settings,
        request: &str,
    ) -> Result<Vec<String>, RetuneError> {
        let completion_request = CompletionRequest {
            model: self.options.model.clone(),
            system_prompt: Some(prompt::extraction_prompt(settings)),
            messages: vec![ChatMessage::user(request)],
            max_tokens: self.options.max_tokens,
        };

        debug!(
            provider = self.provider.name(),
            model = %self.options.model,
            "requesting relevant keys"
        );
        let response = self.provider.complete(completion_request).await?;
        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "extraction response received"
        );

        let cleaned = strip_code_fences(&response.content);
        let keys = match serde_json::from_str::<Vec<String>>(&cleaned) {
            Ok(keys) => keys,
            Err(error) => {
                warn!(%error, "extraction response was not a JSON array of key names, treating as no relevant keys");
                return Ok(Vec::new());
            }
        };

        let unknown: Vec<String> = keys
            .iter()
            .filter(|key| !settings.contains_key(key))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(RetuneError::UnknownKeys { keys: unknown });
        }

        info!(count = keys.len(), "relevant keys identified");
        Ok(keys)
    }
}
