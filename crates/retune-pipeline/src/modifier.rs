// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Second pipeline stage: propose new values for the relevant keys.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use retune_core::{
    ChatMessage, CompletionProvider, CompletionRequest, RetuneError, Settings,
};
use retune_schema::{Schema, SchemaCheck};

use crate::cleanup::strip_code_fences;
use crate::orchestrator::PipelineOptions;
use crate::prompt;

/// Why a modification attempt produced no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The response was not parseable JSON.
    InvalidJson(String),
    /// The parsed object violated a schema constraint.
    SchemaViolation(String),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::InvalidJson(detail) => {
                write!(f, "response was not valid JSON: {detail}")
            }
            RejectReason::SchemaViolation(description) => {
                write!(f, "schema violation: {description}")
            }
        }
    }
}

/// Outcome of a modification attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ModificationOutcome {
    /// Proposed new values for each relevant key, schema-checked and
    /// returned verbatim -- no clamping or coercion.
    Proposed(BTreeMap<String, Value>),
    /// No result: the response failed parsing or validation.
    Rejected(RejectReason),
}

/// Proposes new values for a set of relevant keys.
pub struct KeyModifier {
    provider: Arc<dyn CompletionProvider>,
    options: PipelineOptions,
}

impl KeyModifier {
    pub fn new(provider: Arc<dyn CompletionProvider>, options: PipelineOptions) -> Self {
        Self { provider, options }
    }

    /// Asks the provider for new values for `relevant_keys` and validates
    /// the payload against the schema subset covering those keys.
    ///
    /// Parse failures and schema violations are converted to
    /// [`ModificationOutcome::Rejected`] -- they never raise past this
    /// component. Provider transport failures still propagate as errors.
    pub async fn modify(
        &self,
        settings: &Settings,
        schema: &Schema,
        request: &str,
        relevant_keys: &[String],
    ) -> Result<ModificationOutcome, RetuneError> {
        let subset = schema.for_keys(relevant_keys.iter().map(String::as_str));

        let completion_request = CompletionRequest {
            model: self.options.model.clone(),
            system_prompt: Some(prompt::modification_prompt(settings, &subset, relevant_keys)),
            messages: vec![ChatMessage::user(request)],
            max_tokens: self.options.max_tokens,
        };

        debug!(
            provider = self.provider.name(),
            model = %self.options.model,
            keys = relevant_keys.len(),
            "requesting modification"
        );
        let response = self.provider.complete(completion_request).await?;
        debug!(
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "modification response received"
        );

        let cleaned = strip_code_fences(&response.content);
        let parsed: Value = match serde_json::from_str(&cleaned) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "modification response was not valid JSON");
                return Ok(ModificationOutcome::Rejected(RejectReason::InvalidJson(
                    error.to_string(),
                )));
            }
        };

        match subset.check(&parsed)? {
            SchemaCheck::Ok => {}
            SchemaCheck::Violation(description) => {
                warn!(violation = %description, "modification rejected by schema");
                return Ok(ModificationOutcome::Rejected(
                    RejectReason::SchemaViolation(description),
                ));
            }
        }

        // The subset document declares "type": "object", so a payload that
        // passed the check is an object.
        let Value::Object(entries) = parsed else {
            return Err(RetuneError::Internal(
                "schema-checked payload was not a JSON object".to_string(),
            ));
        };

        let changes: BTreeMap<String, Value> = entries.into_iter().collect();
        info!(count = changes.len(), "modification proposed");
        Ok(ModificationOutcome::Proposed(changes))
    }
}
