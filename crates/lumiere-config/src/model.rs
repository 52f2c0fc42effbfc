// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Lumiere.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level Lumiere configuration.
///
/// All sections are optional and default to the values the greeting was
/// tuned with.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LumiereConfig {
    /// Pacing of the greeting flow and log verbosity.
    #[serde(default)]
    pub greeting: GreetingConfig,

    /// Gemini generation settings.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl LumiereConfig {
    /// Serializes the effective configuration as TOML with the API key masked.
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if let Some(key) = shown.gemini.api_key.as_mut() {
            *key = "<redacted>".to_string();
        }
        toml::to_string_pretty(&shown)
    }
}

/// Greeting flow pacing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GreetingConfig {
    /// Minimum time spent on the processing screen, even for instant catalog hits.
    #[serde(default = "default_min_wait_ms")]
    pub min_wait_ms: u64,

    /// Interval between rotating status lines on the processing screen.
    #[serde(default = "default_status_interval_ms")]
    pub status_interval_ms: u64,

    /// Duration of the box-opening animation before the gift is revealed.
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl GreetingConfig {
    pub fn min_wait(&self) -> Duration {
        Duration::from_millis(self.min_wait_ms)
    }

    pub fn status_interval(&self) -> Duration {
        Duration::from_millis(self.status_interval_ms)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            min_wait_ms: default_min_wait_ms(),
            status_interval_ms: default_status_interval_ms(),
            reveal_delay_ms: default_reveal_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

fn default_min_wait_ms() -> u64 {
    3000
}

fn default_status_interval_ms() -> u64 {
    1200
}

fn default_reveal_delay_ms() -> u64 {
    1500
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` falls back to the `GEMINI_API_KEY` / `API_KEY`
    /// environment variables; without any key, generation is skipped.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model used for `generateContent`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the Generative Language API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
