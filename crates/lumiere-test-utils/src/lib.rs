// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Lumiere.
//!
//! Provides mock adapters for fast, deterministic tests without external
//! services.
//!
//! # Components
//!
//! - [`MockGenerator`] - Mock gift generator with pre-configured gifts
//! - [`MockResolver`] - Mock resolver with scripted outcomes and latency

pub mod mock_generator;
pub mod mock_resolver;

pub use mock_generator::MockGenerator;
pub use mock_resolver::MockResolver;
