// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog-first gift resolution.
//!
//! Order of sources:
//! 1. exact nice-list hit (no external call, `is_cataloged = true`)
//! 2. the configured [`GiftGenerator`], if any
//! 3. a random fallback gift
//!
//! Generation failures never escape: they are logged and replaced by a
//! fallback, so the flow only ever sees a descriptor.

use std::sync::Arc;

use async_trait::async_trait;
use lumiere_core::{GiftDescriptor, GiftGenerator, GiftResolver, LumiereError};
use tracing::{debug, info, warn};

use crate::{fallback, nice_list};

pub struct CatalogResolver {
    generator: Option<Arc<dyn GiftGenerator>>,
}

impl CatalogResolver {
    pub fn new(generator: Option<Arc<dyn GiftGenerator>>) -> Self {
        Self { generator }
    }

    /// A resolver with no generator: catalog hits or fallbacks only.
    pub fn catalog_only() -> Self {
        Self { generator: None }
    }

    /// Name of the configured generator, if any.
    pub fn generator_name(&self) -> Option<&str> {
        self.generator.as_deref().map(|g| g.name())
    }
}

#[async_trait]
impl GiftResolver for CatalogResolver {
    async fn resolve(&self, name: &str) -> Result<GiftDescriptor, LumiereError> {
        if let Some(gift) = nice_list::lookup(name) {
            info!(gift = gift.gift_name, "catalog hit");
            return Ok(gift.to_descriptor(name, true));
        }

        let Some(generator) = self.generator.as_ref() else {
            debug!("no generator configured, using fallback gift");
            return Ok(fallback::pick(name));
        };

        match generator.generate(name).await {
            Ok(gift) => {
                info!(
                    generator = generator.name(),
                    gift = %gift.gift_name,
                    "generated gift"
                );
                Ok(GiftDescriptor::from_generated(name, gift))
            }
            Err(e) => {
                warn!(
                    generator = generator.name(),
                    error = %e,
                    "gift generation failed, using fallback gift"
                );
                Ok(fallback::pick(name))
            }
        }
    }
}
