// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Retune pipeline.

use thiserror::Error;

/// The primary error type used across all Retune crates.
///
/// Parse failures and schema violations inside the modification stage are
/// NOT represented here -- they surface as a rejected outcome instead of an
/// error (see `retune-pipeline`).
#[derive(Debug, Error)]
pub enum RetuneError {
    /// Configuration errors (invalid TOML, bad settings document, missing API key).
    #[error("configuration error: {0}")]
    Config(String),

    /// Text-generation provider errors (HTTP failure, API error response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The extractor returned key names that do not exist in the settings
    /// document. A contract violation by the upstream service, never filtered.
    #[error("extractor returned unknown settings keys: {}", keys.join(", "))]
    UnknownKeys { keys: Vec<String> },

    /// The constraint schema itself could not be compiled.
    #[error("schema error: {0}")]
    Schema(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
