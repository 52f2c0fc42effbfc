// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini gift generator for Lumiere.
//!
//! This crate implements [`GiftGenerator`] on top of the Gemini
//! `generateContent` endpoint with a structured-output schema, so the model
//! answers with exactly `giftName`, `message`, and `theme`.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use lumiere_config::LumiereConfig;
use lumiere_core::{GeneratedGift, GiftGenerator, LumiereError};
use tracing::{debug, info};

use crate::client::GeminiClient;
use crate::types::{Content, GenerateContentRequest, GenerationConfig};

/// Environment variables consulted, in order, when the config has no key.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Gemini generator implementing [`GiftGenerator`].
///
/// API key resolution order: config -> `GEMINI_API_KEY` -> `API_KEY`.
pub struct GeminiGenerator {
    client: GeminiClient,
}

impl GeminiGenerator {
    /// Creates a generator from configuration.
    ///
    /// Returns `Ok(None)` when no API key is available anywhere; callers run
    /// without generation in that case.
    pub fn from_config(config: &LumiereConfig) -> Result<Option<Self>, LumiereError> {
        let Some(api_key) = resolve_api_key(&config.gemini.api_key) else {
            info!("no Gemini API key configured, generation disabled");
            return Ok(None);
        };

        let client = GeminiClient::new(
            &api_key,
            config.gemini.model.clone(),
            &config.gemini.base_url,
            Duration::from_secs(config.gemini.timeout_secs),
        )?;

        info!(model = %config.gemini.model, "Gemini generator initialized");

        Ok(Some(Self { client }))
    }

    /// Creates a generator with an existing client.
    pub fn with_client(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GiftGenerator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, recipient: &str) -> Result<GeneratedGift, LumiereError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(gift_prompt(recipient))],
            generation_config: GenerationConfig::gift_json(),
        };

        let response = self.client.generate_content(&request).await?;
        let text = response
            .first_text()
            .ok_or_else(|| LumiereError::MalformedOutput {
                message: "response has no text candidate".into(),
            })?;
        debug!(model = self.client.model(), len = text.len(), "gift text received");

        parse_gift(&text)
    }
}

/// Parses and checks the model's JSON answer.
///
/// The schema already constrains the shape; this additionally rejects blank
/// names or messages and the non-generatable `festive` theme.
pub fn parse_gift(text: &str) -> Result<GeneratedGift, LumiereError> {
    let gift: GeneratedGift =
        serde_json::from_str(text.trim()).map_err(|e| LumiereError::MalformedOutput {
            message: format!("gift JSON does not match schema: {e}"),
        })?;

    if gift.gift_name.trim().is_empty() {
        return Err(LumiereError::MalformedOutput {
            message: "empty giftName".into(),
        });
    }
    if gift.message.trim().is_empty() {
        return Err(LumiereError::MalformedOutput {
            message: "empty message".into(),
        });
    }
    if !lumiere_core::Theme::GENERATABLE.contains(&gift.theme) {
        return Err(LumiereError::MalformedOutput {
            message: format!("theme '{}' is not allowed", gift.theme),
        });
    }
    Ok(gift)
}

/// Builds the generation prompt for `recipient`.
pub fn gift_prompt(recipient: &str) -> String {
    format!(
        "Generate a CREATIVE Christmas gift for someone named {recipient}.\n\
         \n\
         The gift can be:\n\
         1. A physical object (Tech, Luxury, Classic).\n\
         2. An abstract concept (Advice, a Goal for the new year, a Wish, or Wisdom).\n\
         3. Something whimsical.\n\
         \n\
         If it's a physical object, prefer items with 3D models such as: Car, Sneaker, \
         Camera, Robot, Astronaut, Chair, Burger, Radio, Helmet, or Lantern.\n\
         \n\
         Occasionally, suggest high-value items like \"iPhone 17 Pro Max\", \"Cyber Truck\" \
         or \"Sports Car\".\n\
         \n\
         If it's abstract, make the message inspiring, heartwarming, and elegant.\n\
         \n\
         Output JSON with fields:\n\
         - 'giftName' (string)\n\
         - 'message' (string, 1-2 sentences, poetic and kind)\n\
         - 'theme' (one of 'luxury', 'tech', 'whimsical', 'classic', 'inspiration')."
    )
}

/// Resolves the API key: a non-empty config value, then each of
/// [`API_KEY_ENV_VARS`] in order.
pub fn resolve_api_key(config_key: &Option<String>) -> Option<String> {
    resolve_api_key_with(config_key, |var| std::env::var(var).ok())
}

fn resolve_api_key_with(
    config_key: &Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    if let Some(key) = config_key.as_ref().filter(|key| !key.trim().is_empty()) {
        return Some(key.clone());
    }

    API_KEY_ENV_VARS
        .iter()
        .filter_map(|var| env(var))
        .find(|value| !value.trim().is_empty())
}
