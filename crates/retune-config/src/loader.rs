// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./retune.toml` > `~/.config/retune/retune.toml`
//! > `/etc/retune/retune.toml` with environment variable overrides via the
//! `RETUNE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RetuneConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/retune/retune.toml` (system-wide)
/// 3. `~/.config/retune/retune.toml` (user XDG config)
/// 4. `./retune.toml` (local directory)
/// 5. `RETUNE_*` environment variables
pub fn load_config() -> Result<RetuneConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RetuneConfig::default()))
        .merge(Toml::file("/etc/retune/retune.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("retune/retune.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("retune.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<RetuneConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RetuneConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RetuneConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RetuneConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `RETUNE_ANTHROPIC_API_KEY` must map to
/// `anthropic.api_key`, not `anthropic.api.key`.
fn env_provider() -> Env {
    Env::prefixed("RETUNE_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("anthropic_", "anthropic.", 1);
        mapped.into()
    })
}
