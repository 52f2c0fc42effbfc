// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions.
//!
//! Both adapters use `#[async_trait]` for dynamic dispatch compatibility.

pub mod generator;
pub mod resolver;

pub use generator::GiftGenerator;
pub use resolver::GiftResolver;
