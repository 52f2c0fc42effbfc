// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Lumiere.
//!
//! This crate provides the error type, the gift types, and the two adapter
//! traits the rest of the workspace is wired through.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::LumiereError;
pub use traits::{GiftGenerator, GiftResolver};
pub use types::{normalize_name, GeneratedGift, GiftDescriptor, Theme};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn lumiere_error_variants_display() {
        let config = LumiereError::Config("missing key".into());
        assert_eq!(config.to_string(), "configuration error: missing key");

        let provider = LumiereError::Provider {
            message: "HTTP 500".into(),
            source: None,
        };
        assert_eq!(provider.to_string(), "provider error: HTTP 500");

        let malformed = LumiereError::MalformedOutput {
            message: "missing giftName".into(),
        };
        assert!(malformed.to_string().contains("missing giftName"));

        let timeout = LumiereError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        assert!(timeout.to_string().contains("30s"));
    }

    #[test]
    fn theme_display_and_parse_round_trip() {
        use strum::IntoEnumIterator;

        for theme in Theme::iter() {
            let s = theme.to_string();
            assert_eq!(s, s.to_lowercase());
            assert_eq!(Theme::from_str(&s).expect("should parse back"), theme);
        }
    }

    #[test]
    fn theme_serializes_lowercase() {
        let json = serde_json::to_string(&Theme::Inspiration).unwrap();
        assert_eq!(json, "\"inspiration\"");
    }

    #[test]
    fn generated_gift_uses_wire_field_names() {
        let gift: GeneratedGift = serde_json::from_str(
            r#"{"giftName":"Ticket to Mars","message":"Dream big.","theme":"tech"}"#,
        )
        .unwrap();
        assert_eq!(gift.gift_name, "Ticket to Mars");
        assert_eq!(gift.theme, Theme::Tech);
    }

    #[test]
    fn generated_gift_rejects_unknown_theme() {
        let result = serde_json::from_str::<GeneratedGift>(
            r#"{"giftName":"Socks","message":"Warm feet.","theme":"cozy"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn generated_gift_rejects_missing_field() {
        let result =
            serde_json::from_str::<GeneratedGift>(r#"{"giftName":"Socks","theme":"classic"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn generated_descriptor_is_never_cataloged() {
        let gift = GeneratedGift {
            gift_name: "Retro BoomBox".into(),
            message: "Music.".into(),
            theme: Theme::Classic,
        };
        let descriptor = GiftDescriptor::from_generated("Mina", gift);
        assert_eq!(descriptor.recipient_name, "Mina");
        assert!(!descriptor.is_cataloged);
    }

    #[test]
    fn share_text_format() {
        let descriptor = GiftDescriptor {
            recipient_name: "Alex".into(),
            gift_name: "A Vintage Camera".into(),
            message: "Capture every moment.".into(),
            theme: Theme::Classic,
            is_cataloged: true,
        };
        assert_eq!(
            descriptor.share_text(),
            "I got A Vintage Camera for Christmas! \"Capture every moment.\" #LumiereDeNoel"
        );
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_name("  ShUbHaM \n"), "shubham");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn all_traits_are_exported() {
        fn _assert_resolver<T: GiftResolver>() {}
        fn _assert_generator<T: GiftGenerator>() {}
    }
}
