// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static gift data for Lumiere and the resolver built on top of it.
//!
//! - [`nice_list`]: the curated catalog of known recipients
//! - [`fallback`]: gifts handed out when nothing else is available
//! - [`recipients`]: scripted recipients with extra gift queues and closing cards
//! - [`assets`]: gift-name and theme lookups for 3D models and audio tracks
//! - [`resolver`]: [`CatalogResolver`], catalog first, then generation, then fallback

pub mod assets;
pub mod fallback;
pub mod nice_list;
pub mod recipients;
pub mod resolver;

use lumiere_core::{GiftDescriptor, Theme};

pub use recipients::{Script, SpecialRecipient, SPECIAL_RECIPIENTS};
pub use resolver::CatalogResolver;

/// A gift compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogGift {
    pub gift_name: &'static str,
    pub message: &'static str,
    pub theme: Theme,
}

impl CatalogGift {
    /// Builds a fresh descriptor for `recipient`.
    pub fn to_descriptor(&self, recipient: &str, is_cataloged: bool) -> GiftDescriptor {
        GiftDescriptor {
            recipient_name: recipient.to_string(),
            gift_name: self.gift_name.to_string(),
            message: self.message.to_string(),
            theme: self.theme,
            is_cataloged,
        }
    }
}
