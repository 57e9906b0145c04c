// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response text cleanup shared by the extractor and modifier.
//!
//! Models are instructed not to wrap output in markdown fencing, but the
//! instruction is not always honored. Fences are stripped before parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Matches an opening ``` or ```json fence at the start of the text, or a
/// closing ``` fence at the end.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A\s*```(?:json)?[ \t]*\r?\n|\r?\n```\s*\z").expect("fence regex is valid")
});

/// Strips an optional markdown code fence wrapping from raw model output
/// and trims surrounding whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    FENCE_RE.replace_all(raw, "").trim().to_string()
}
