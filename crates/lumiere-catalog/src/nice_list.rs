// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The nice list: predetermined gifts keyed by normalized name.

use lumiere_core::{normalize_name, Theme};

use crate::CatalogGift;

/// Catalog entries keyed by trimmed, lower-cased name.
pub const NICE_LIST: &[(&str, CatalogGift)] = &[
    (
        "alex",
        CatalogGift {
            gift_name: "A High-Tech Space Astronaut Suit",
            message: "Explore the universe and reach for the stars!",
            theme: Theme::Tech,
        },
    ),
    (
        "sarah",
        CatalogGift {
            gift_name: "A Vintage Camera",
            message: "Capture every beautiful moment of your journey.",
            theme: Theme::Classic,
        },
    ),
    (
        "john",
        CatalogGift {
            gift_name: "A Custom Electric Guitar",
            message: "Rock around the Christmas tree and let your soul sing!",
            theme: Theme::Classic,
        },
    ),
    (
        "shubham",
        CatalogGift {
            gift_name: "The Master Key to the North Pole",
            message: "You run the show now, Santa!",
            theme: Theme::Luxury,
        },
    ),
    (
        "priya",
        CatalogGift {
            gift_name: "Limited Edition Designer Sneakers",
            message: "Walk into the new year with confidence and style.",
            theme: Theme::Luxury,
        },
    ),
    (
        "sierra",
        CatalogGift {
            gift_name: "iPhone 17 Pro Max Titanium",
            message: "The future is in your hands. Capture magic, connect with love, and shine bright!",
            theme: Theme::Tech,
        },
    ),
    (
        "ranjana",
        CatalogGift {
            gift_name: "A Cute Robot Guardian",
            message: "To my wonderful little sister: May this magical friend protect your biggest dreams and keep you smiling every single day. You are a star!",
            theme: Theme::Whimsical,
        },
    ),
    (
        "bhagawati",
        CatalogGift {
            gift_name: "The Lantern of Eternal Love",
            message: "In a world full of stars, you are my only sun. You guide me through the dark and warm my soul. This light represents my love for you, burning bright, forever.",
            theme: Theme::Luxury,
        },
    ),
    (
        "carlsagan",
        CatalogGift {
            gift_name: "Voyager Golden Record",
            message: "To Carl Sagan: The cosmos is within us. We are made of star-stuff. May this record carry the story of humanity across the infinite sea of space.",
            theme: Theme::Inspiration,
        },
    ),
];

/// Exact lookup after trimming and lower-casing. No substring matching here.
pub fn lookup(name: &str) -> Option<&'static CatalogGift> {
    let key = normalize_name(name);
    NICE_LIST
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, gift)| gift)
}
