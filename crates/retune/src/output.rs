// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal output for pipeline run reports.

use std::time::Duration;

use retune_pipeline::{RunOutcome, RunReport};

/// Prints a run report to stdout: the relevant keys, the proposed values or
/// the failure, and the elapsed wall-clock time.
pub fn print_report(report: &RunReport) {
    match &report.outcome {
        RunOutcome::NoRelevantKeys => {
            println!("No relevant settings keys were identified.");
        }
        RunOutcome::Rejected {
            relevant_keys,
            reason,
        } => {
            println!("Relevant settings keys: {}", key_list(relevant_keys));
            println!("Modification failed: {reason}. No valid updates generated.");
        }
        RunOutcome::Updated {
            relevant_keys,
            changes,
        } => {
            println!("Relevant settings keys: {}", key_list(relevant_keys));
            println!("Proposed settings:");
            println!(
                "{}",
                serde_json::to_string_pretty(changes)
                    .unwrap_or_else(|_| "<unprintable>".to_string())
            );
        }
    }
    println!("Total execution time: {}", format_elapsed(report.elapsed));
}

fn key_list(keys: &[String]) -> String {
    serde_json::to_string(keys).unwrap_or_else(|_| format!("{keys:?}"))
}

/// Formats a duration as `XmYsZms`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;
    format!("{minutes}m {seconds}s {millis}ms")
}
