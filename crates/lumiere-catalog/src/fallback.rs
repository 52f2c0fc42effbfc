// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gifts handed out when a name is not cataloged and generation is unavailable.

use lumiere_core::{GiftDescriptor, Theme};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::CatalogGift;

const fn gift(gift_name: &'static str, message: &'static str, theme: Theme) -> CatalogGift {
    CatalogGift {
        gift_name,
        message,
        theme,
    }
}

/// The fallback set. Leading entries all have a matching 3D model.
pub const FALLBACK_GIFTS: &[CatalogGift] = &[
    gift(
        "iPhone 17 Pro Max Titanium",
        "The future is in your hands. Capture magic, connect with love, and shine bright!",
        Theme::Tech,
    ),
    gift(
        "Futuristic Cyber Truck",
        "Drive into the new year with unbreakable spirit and power.",
        Theme::Tech,
    ),
    gift(
        "High-Tech Space Astronaut Suit",
        "Explore the universe and reach for the stars!",
        Theme::Tech,
    ),
    gift(
        "A Vintage Camera",
        "Capture every beautiful moment of your journey.",
        Theme::Classic,
    ),
    gift(
        "Custom Electric Guitar",
        "Rock around the Christmas tree and let your soul sing!",
        Theme::Classic,
    ),
    gift(
        "Designer Sneakers",
        "Walk into the new year with confidence and style.",
        Theme::Luxury,
    ),
    gift(
        "A Cute Robot Guardian",
        "May this magical friend protect your biggest dreams and keep you smiling every single day. You are a star!",
        Theme::Whimsical,
    ),
    gift(
        "The Lantern of Eternal Love",
        "In a world full of stars, you are my only sun. You guide me through the dark and warm my soul.",
        Theme::Luxury,
    ),
    gift(
        "Antique Camera",
        "Preserve your precious memories in timeless elegance.",
        Theme::Classic,
    ),
    gift(
        "Modern Chair",
        "Comfort meets style in this perfect seating companion.",
        Theme::Luxury,
    ),
    gift(
        "Delicious Burger Meal",
        "Sometimes happiness is just good food and great company!",
        Theme::Whimsical,
    ),
    gift(
        "Retro BoomBox",
        "Fill your world with the music that moves your soul.",
        Theme::Classic,
    ),
    gift(
        "Damaged Helmet",
        "A symbol of resilience and the battles you've overcome.",
        Theme::Luxury,
    ),
    gift(
        "Toy Car",
        "Zoom through life with endless adventure and joy!",
        Theme::Whimsical,
    ),
    gift(
        "A Year of Serenity",
        "May your days be calm, your mind clear, and your heart light.",
        Theme::Inspiration,
    ),
    gift(
        "Ticket to Mars",
        "For the one who dreams bigger than the sky.",
        Theme::Tech,
    ),
    gift(
        "The Gift of Wisdom",
        "Trust your intuition, it is your best compass.",
        Theme::Inspiration,
    ),
    gift(
        "A Cozy Designer Chair",
        "Take a seat, breathe, and appreciate how far you've come.",
        Theme::Luxury,
    ),
];

/// Draws a fallback gift for `recipient` using `rng`. Never cataloged.
pub fn pick_with<R: Rng + ?Sized>(recipient: &str, rng: &mut R) -> GiftDescriptor {
    // FALLBACK_GIFTS is a non-empty constant.
    let chosen = FALLBACK_GIFTS.choose(rng).unwrap_or(&FALLBACK_GIFTS[0]);
    chosen.to_descriptor(recipient, false)
}

/// Draws a fallback gift with the thread-local RNG.
pub fn pick(recipient: &str) -> GiftDescriptor {
    pick_with(recipient, &mut rand::thread_rng())
}

/// Whether `descriptor` is one of the fallback gifts.
pub fn is_fallback(descriptor: &GiftDescriptor) -> bool {
    FALLBACK_GIFTS.iter().any(|g| {
        g.gift_name == descriptor.gift_name
            && g.message == descriptor.message
            && g.theme == descriptor.theme
    })
}
