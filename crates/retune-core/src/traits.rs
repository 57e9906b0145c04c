// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The provider seam between the pipeline and the external text-generation
//! service.

use async_trait::async_trait;

use crate::error::RetuneError;
use crate::types::{CompletionRequest, CompletionResponse};

/// A text-generation service that answers a single role-tagged exchange.
///
/// The pipeline treats the provider as an untrusted producer of text: every
/// response is cleaned, parsed, and validated defensively. Authentication,
/// rate limiting, and retries are the provider's own concern -- the pipeline
/// issues exactly one call per stage.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name, used in logs.
    fn name(&self) -> &str;

    /// Sends one completion request and waits for the full response.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, RetuneError>;
}
