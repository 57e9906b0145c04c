// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sequences the extract and modify stages for a single run.
//!
//! The state machine is linear: extract, then (only if keys were found)
//! modify. No retries, no loops, no cancellation. The two provider calls
//! are strictly sequential because the modifier needs the extractor's
//! output.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::info;

use retune_core::{CompletionProvider, RetuneError, Settings};
use retune_schema::Schema;

use crate::extractor::KeyExtractor;
use crate::modifier::{KeyModifier, ModificationOutcome, RejectReason};

/// Model parameters shared by both pipeline stages.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Model identifier passed to the provider.
    pub model: String,
    /// Maximum tokens to generate per response.
    pub max_tokens: u32,
}

/// The two-stage extract/modify pipeline.
///
/// Settings and schema are explicit call parameters, never process-wide
/// state, so the pipeline is testable with arbitrary documents.
pub struct Pipeline {
    extractor: KeyExtractor,
    modifier: KeyModifier,
}

/// How a single pipeline run ended.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The extractor found nothing to change; the modifier was never invoked.
    NoRelevantKeys,
    /// The modifier produced no acceptable result.
    Rejected {
        relevant_keys: Vec<String>,
        reason: RejectReason,
    },
    /// Proposed new values for the relevant keys.
    Updated {
        relevant_keys: Vec<String>,
        changes: BTreeMap<String, Value>,
    },
}

/// A completed run: the outcome plus elapsed wall-clock time for the full
/// sequence.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub elapsed: Duration,
}

impl Pipeline {
    pub fn new(provider: Arc<dyn CompletionProvider>, options: PipelineOptions) -> Self {
        Self {
            extractor: KeyExtractor::new(Arc::clone(&provider), options.clone()),
            modifier: KeyModifier::new(provider, options),
        }
    }

    /// Runs extract then modify, short-circuiting when no keys are relevant.
    pub async fn run(
        &self,
        settings: &Settings,
        schema: &Schema,
        request: &str,
    ) -> Result<RunReport, RetuneError> {
        let started = Instant::now();

        let relevant_keys = self.extractor.analyze(settings, request).await?;
        if relevant_keys.is_empty() {
            info!("no relevant keys identified, skipping modification");
            return Ok(RunReport {
                outcome: RunOutcome::NoRelevantKeys,
                elapsed: started.elapsed(),
            });
        }

        let outcome = match self
            .modifier
            .modify(settings, schema, request, &relevant_keys)
            .await?
        {
            ModificationOutcome::Proposed(changes) => RunOutcome::Updated {
                relevant_keys,
                changes,
            },
            ModificationOutcome::Rejected(reason) => RunOutcome::Rejected {
                relevant_keys,
                reason,
            },
        };

        Ok(RunReport {
            outcome,
            elapsed: started.elapsed(),
        })
    }
}
