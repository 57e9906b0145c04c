// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Constraint schema for Retune settings documents.
//!
//! A [`Schema`] declares, for a subset of settings keys, the expected value
//! type and inclusive numeric bounds, plus which keys a modification payload
//! must include. Validation is delegated to the `jsonschema` crate over the
//! rendered JSON Schema document.

pub mod model;
pub mod validate;

pub use model::{Constraint, Schema, ValueKind};
pub use validate::SchemaCheck;
