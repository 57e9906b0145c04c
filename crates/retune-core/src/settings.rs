// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The flat key/value settings document the pipeline reasons about.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::RetuneError;

/// A flat settings document mapping key names to scalar values.
///
/// Values are restricted to integers, floats, strings, and booleans; nested
/// arrays and objects are rejected at construction. Keys are fixed once the
/// document is built -- the pipeline never mutates it in place, it returns a
/// separate mapping of proposed values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    entries: BTreeMap<String, Value>,
}

impl Settings {
    /// Builds a settings document from a JSON object value.
    ///
    /// Fails if the value is not an object or if any entry is not a scalar.
    pub fn from_value(value: Value) -> Result<Self, RetuneError> {
        let Value::Object(map) = value else {
            return Err(RetuneError::Config(
                "settings document must be a JSON object".to_string(),
            ));
        };

        let mut entries = BTreeMap::new();
        for (key, value) in map {
            if !is_scalar(&value) {
                return Err(RetuneError::Config(format!(
                    "settings key `{key}` has a non-scalar value; only integers, \
                     floats, strings, and booleans are supported"
                )));
            }
            entries.insert(key, value);
        }

        Ok(Self { entries })
    }

    /// Parses a settings document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, RetuneError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| RetuneError::Config(format!("invalid settings JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Returns true when `key` exists in the document.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the current value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterates over the key names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Renders the document back into a JSON object value.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Number(_) | Value::String(_) | Value::Bool(_))
}
