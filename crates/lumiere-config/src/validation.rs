// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as timing bounds and URL schemes.

use crate::diagnostic::ConfigError;
use crate::model::LumiereConfig;

/// Longest minimum wait accepted on the processing screen.
pub const MAX_MIN_WAIT_MS: u64 = 60_000;

/// Longest accepted reveal animation.
pub const MAX_REVEAL_DELAY_MS: u64 = 10_000;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &LumiereConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let greeting = &config.greeting;

    if greeting.min_wait_ms > MAX_MIN_WAIT_MS {
        errors.push(ConfigError::Validation {
            message: format!(
                "greeting.min_wait_ms must be at most {MAX_MIN_WAIT_MS}, got {}",
                greeting.min_wait_ms
            ),
        });
    }

    if greeting.status_interval_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "greeting.status_interval_ms must be greater than 0".to_string(),
        });
    }

    if greeting.reveal_delay_ms > MAX_REVEAL_DELAY_MS {
        errors.push(ConfigError::Validation {
            message: format!(
                "greeting.reveal_delay_ms must be at most {MAX_REVEAL_DELAY_MS}, got {}",
                greeting.reveal_delay_ms
            ),
        });
    }

    if !LOG_LEVELS.contains(&greeting.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "greeting.log_level `{}` is not one of {}",
                greeting.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let gemini = &config.gemini;

    if gemini.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.model must not be empty".to_string(),
        });
    }

    let base_url = gemini.base_url.trim();
    if base_url.is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.base_url must not be empty".to_string(),
        });
    } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("gemini.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if gemini.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.timeout_secs must be greater than 0".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
