// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Retune pipeline.
//!
//! This crate provides the error type, the provider trait, the completion
//! request/response types, and the [`Settings`] document shared by the rest
//! of the workspace.

pub mod error;
pub mod settings;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::RetuneError;
pub use settings::Settings;
pub use traits::CompletionProvider;
pub use types::{ChatMessage, CompletionRequest, CompletionResponse, TokenUsage};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retune_error_has_all_variants() {
        let _config = RetuneError::Config("test".into());
        let _provider = RetuneError::Provider {
            message: "test".into(),
            source: None,
        };
        let _unknown = RetuneError::UnknownKeys {
            keys: vec!["bogus".into()],
        };
        let _schema = RetuneError::Schema("test".into());
        let _internal = RetuneError::Internal("test".into());
    }

    #[test]
    fn unknown_keys_error_names_the_offenders() {
        let err = RetuneError::UnknownKeys {
            keys: vec!["nonexistent_key".into(), "other".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("nonexistent_key"), "got: {msg}");
        assert!(msg.contains("other"), "got: {msg}");
    }
}
