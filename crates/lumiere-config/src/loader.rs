// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy, highest first: `./lumiere.toml`,
//! `~/.config/lumiere/lumiere.toml`, `/etc/lumiere/lumiere.toml`. Environment
//! variables with the `LUMIERE_` prefix override all of them.

// figment::Error is external and cannot be boxed without a wrapper.
#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LumiereConfig;

/// System-wide configuration file.
pub const SYSTEM_CONFIG_FILE: &str = "/etc/lumiere/lumiere.toml";

/// Configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "lumiere.toml";

/// Path of the per-user configuration file, if a config directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lumiere").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/lumiere/lumiere.toml` (system-wide)
/// 3. `~/.config/lumiere/lumiere.toml` (user XDG config)
/// 4. `./lumiere.toml` (local directory)
/// 5. `LUMIERE_*` environment variables
pub fn load_config() -> Result<LumiereConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<LumiereConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LumiereConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LumiereConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LumiereConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    config_files()
        .into_iter()
        .fold(
            Figment::new().merge(Serialized::defaults(LumiereConfig::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
        .merge(env_provider())
}

/// Candidate TOML files in merge order, lowest precedence first.
pub fn config_files() -> Vec<PathBuf> {
    let mut files = vec![PathBuf::from(SYSTEM_CONFIG_FILE)];
    files.extend(user_config_path());
    files.push(PathBuf::from(LOCAL_CONFIG_FILE));
    files
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `LUMIERE_GREETING_MIN_WAIT_MS` must map to
/// `greeting.min_wait_ms`, not `greeting.min.wait.ms`.
pub fn env_provider() -> Env {
    Env::prefixed("LUMIERE_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("greeting_", "greeting.", 1)
            .replacen("gemini_", "gemini.", 1);
        mapped.into()
    })
}
