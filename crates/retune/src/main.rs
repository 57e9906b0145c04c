// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Retune -- proposes validated settings changes from natural-language
//! requests.
//!
//! This is the binary entry point. It loads the application config, reads
//! the settings document and constraint schema from JSON files, runs the
//! extract/modify pipeline once, and prints the report.

mod output;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use retune_anthropic::AnthropicProvider;
use retune_config::RetuneConfig;
use retune_core::{RetuneError, Settings};
use retune_pipeline::{Pipeline, PipelineOptions};
use retune_schema::Schema;

/// Retune -- proposes validated settings changes from natural-language
/// requests.
#[derive(Parser, Debug)]
#[command(name = "retune", version, about, long_about = None)]
struct Cli {
    /// Natural-language request describing the desired change.
    request: String,

    /// Path to the settings document (flat JSON object of scalar values).
    #[arg(long, value_name = "FILE")]
    settings: PathBuf,

    /// Path to the constraint schema (JSON).
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,

    /// Override the configured model identifier.
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match retune_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            retune_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.agent.log_level);

    if let Err(error) = run(cli, config).await {
        eprintln!("retune: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: RetuneConfig) -> Result<(), RetuneError> {
    let settings = load_settings(&cli.settings)?;
    let schema = load_schema(&cli.schema)?;

    let provider = Arc::new(AnthropicProvider::new(&config)?);
    let options = PipelineOptions {
        model: cli
            .model
            .unwrap_or_else(|| config.anthropic.default_model.clone()),
        max_tokens: config.anthropic.max_tokens,
    };
    let pipeline = Pipeline::new(provider, options);

    let report = pipeline.run(&settings, &schema, &cli.request).await?;
    output::print_report(&report);
    Ok(())
}

fn load_settings(path: &Path) -> Result<Settings, RetuneError> {
    let text = read_file(path)?;
    Settings::from_json(&text)
}

fn load_schema(path: &Path) -> Result<Schema, RetuneError> {
    let text = read_file(path)?;
    Schema::from_json(&text)
}

fn read_file(path: &Path) -> Result<String, RetuneError> {
    std::fs::read_to_string(path).map_err(|e| {
        RetuneError::Config(format!("failed to read {}: {e}", path.display()))
    })
}

/// Initializes the tracing subscriber. `RUST_LOG` wins over the configured
/// log level. Logs go to stderr so stdout stays clean for the report.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
