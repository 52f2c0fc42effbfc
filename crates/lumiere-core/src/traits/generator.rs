// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generator adapter trait for external generative services (Gemini, etc.).

use async_trait::async_trait;

use crate::error::LumiereError;
use crate::types::GeneratedGift;

/// Adapter for a generative text service that invents a gift for a name.
///
/// Implementations must return [`LumiereError::MalformedOutput`] when the
/// service answers with something that is not a [`GeneratedGift`].
#[async_trait]
pub trait GiftGenerator: Send + Sync + 'static {
    /// Returns the human-readable name of this generator.
    fn name(&self) -> &str;

    /// Asks the service for a gift for `recipient`.
    async fn generate(&self, recipient: &str) -> Result<GeneratedGift, LumiereError>;
}
