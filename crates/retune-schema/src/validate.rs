// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validation of proposed modification payloads against a [`Schema`].

use serde_json::Value;

use retune_core::RetuneError;

use crate::model::Schema;

/// Outcome of checking an instance against a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaCheck {
    /// The instance satisfies every constraint.
    Ok,
    /// The first violation found, with its instance path.
    Violation(String),
}

impl Schema {
    /// Validates `instance` against this schema.
    ///
    /// Reports the first violation only; no clamping or coercion is applied,
    /// the instance either passes or the violation is described. Returns an
    /// error only if the schema document itself fails to compile.
    pub fn check(&self, instance: &Value) -> Result<SchemaCheck, RetuneError> {
        let document = self.to_document();
        let validator = jsonschema::validator_for(&document)
            .map_err(|e| RetuneError::Schema(format!("failed to compile schema: {e}")))?;

        match validator.validate(instance) {
            Ok(()) => Ok(SchemaCheck::Ok),
            Err(violation) => Ok(SchemaCheck::Violation(describe(&violation))),
        }
    }
}

/// Formats a violation with its instance path when one is present.
fn describe(error: &jsonschema::ValidationError<'_>) -> String {
    let path = error.instance_path.to_string();
    if path.is_empty() {
        error.to_string()
    } else {
        format!("{path}: {error}")
    }
}
