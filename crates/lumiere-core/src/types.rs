// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gift types shared by the catalog, the generator adapters, and the flow.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Visual and audio theme of a gift.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Festive,
    Luxury,
    Tech,
    Whimsical,
    Classic,
    Inspiration,
}

impl Theme {
    /// Themes a generation provider is allowed to answer with.
    ///
    /// `festive` is reserved for the page chrome and never generated.
    pub const GENERATABLE: [Theme; 5] = [
        Theme::Luxury,
        Theme::Tech,
        Theme::Whimsical,
        Theme::Classic,
        Theme::Inspiration,
    ];
}

/// The structured output of a generation provider.
///
/// Field names follow the wire schema (`giftName`, `message`, `theme`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratedGift {
    pub gift_name: String,
    pub message: String,
    pub theme: Theme,
}

/// One resolved gift, ready to be revealed.
///
/// Descriptors are never mutated after construction; each reveal gets a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftDescriptor {
    pub recipient_name: String,
    pub gift_name: String,
    pub message: String,
    pub theme: Theme,
    pub is_cataloged: bool,
}

impl GiftDescriptor {
    /// Wraps a generated gift for `recipient`. Generated gifts are never cataloged.
    pub fn from_generated(recipient: &str, gift: GeneratedGift) -> Self {
        Self {
            recipient_name: recipient.to_string(),
            gift_name: gift.gift_name,
            message: gift.message,
            theme: gift.theme,
            is_cataloged: false,
        }
    }

    /// Text placed on the clipboard by the share action.
    pub fn share_text(&self) -> String {
        format!(
            "I got {} for Christmas! \"{}\" #LumiereDeNoel",
            self.gift_name, self.message
        )
    }
}

/// Normalizes a visitor name for catalog and recipient matching.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
