// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolver trait: the boundary between the greeting flow and gift sources.

use async_trait::async_trait;

use crate::error::LumiereError;
use crate::types::GiftDescriptor;

/// Turns a visitor name into a gift descriptor.
///
/// This is the only asynchronous, fallible operation the greeting flow
/// depends on. The flow only observes the descriptor and its
/// `is_cataloged` flag, never which source produced it.
#[async_trait]
pub trait GiftResolver: Send + Sync + 'static {
    async fn resolve(&self, name: &str) -> Result<GiftDescriptor, LumiereError>;
}
