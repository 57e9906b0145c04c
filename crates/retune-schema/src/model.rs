// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constraint schema model: per-key declared types and inclusive numeric
//! bounds, plus the required-key list for modification payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use strum::{Display, EnumString};

use retune_core::RetuneError;

/// Declared value type for a settings key.
///
/// Serializes to the JSON Schema type names (`integer`, `number`, `string`,
/// `boolean`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValueKind {
    Integer,
    Number,
    String,
    Boolean,
}

/// Constraints for a single settings key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// Declared type for the value.
    #[serde(rename = "type")]
    pub kind: ValueKind,

    /// Inclusive lower bound. Only meaningful for numeric kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Inclusive upper bound. Only meaningful for numeric kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

impl Constraint {
    /// A bare type constraint with no bounds.
    pub fn of(kind: ValueKind) -> Self {
        Self {
            kind,
            minimum: None,
            maximum: None,
        }
    }

    /// A numeric constraint with inclusive bounds.
    pub fn ranged(kind: ValueKind, minimum: f64, maximum: f64) -> Self {
        Self {
            kind,
            minimum: Some(minimum),
            maximum: Some(maximum),
        }
    }
}

/// Per-key constraints for a subset of settings keys, plus the list of keys
/// required to be present in a modification payload.
///
/// Round-trips with the JSON Schema subset used in schema files:
/// `{"properties": {"exam_weight": {"type": "number", "minimum": 0.0, ...}},
/// "required": [...]}`. Unrecognized top-level fields (such as `"type":
/// "object"` in a full document) are ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub properties: BTreeMap<String, Constraint>,

    #[serde(default)]
    pub required: Vec<String>,
}

impl Schema {
    /// Parses a schema from JSON text.
    pub fn from_json(text: &str) -> Result<Self, RetuneError> {
        serde_json::from_str(text)
            .map_err(|e| RetuneError::Schema(format!("invalid schema JSON: {e}")))
    }

    /// Renders the full JSON Schema object document for this constraint set.
    pub fn to_document(&self) -> Value {
        json!({
            "type": "object",
            "properties": self.properties,
            "required": self.required,
        })
    }

    /// Returns the subset schema covering `keys`.
    ///
    /// Properties are restricted to the listed keys; the required list is the
    /// intersection of the original required list with `keys`, so a payload
    /// for a key subset is only held to the requirements that apply to it.
    pub fn for_keys<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Schema {
        let mut properties = BTreeMap::new();
        let mut required = Vec::new();

        for key in keys {
            if let Some(constraint) = self.properties.get(key) {
                properties.insert(key.to_string(), constraint.clone());
            }
            if self.required.iter().any(|r| r == key) {
                required.push(key.to_string());
            }
        }

        Schema {
            properties,
            required,
        }
    }

    /// Returns true when no key has a declared constraint.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.required.is_empty()
    }
}
