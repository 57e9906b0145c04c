// SPDX-FileCopyrightText: 2026 Retune Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Retune integration tests.

pub mod mock_provider;

pub use mock_provider::MockProvider;
