// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for Lumiere.
//!
//! Layered TOML files and `LUMIERE_*` environment variables are merged with
//! figment, checked against the semantic rules in [`validation`], and any
//! failure is reported as a list of miette diagnostics.
//!
//! ```no_run
//! let config = lumiere_config::load_and_validate().expect("config errors");
//! println!("minimum wait: {}ms", config.greeting.min_wait_ms);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::LumiereConfig;

/// Loads the layered configuration and validates it.
pub fn load_and_validate() -> Result<LumiereConfig, Vec<ConfigError>> {
    checked(loader::load_config(), || {
        loader::config_files()
            .iter()
            .filter_map(|path| read_source(path))
            .collect()
    })
}

/// Loads one file (plus environment overrides) and validates it.
pub fn load_and_validate_path(path: &Path) -> Result<LumiereConfig, Vec<ConfigError>> {
    checked(loader::load_config_from_path(path), || {
        read_source(path).into_iter().collect()
    })
}

/// Loads an inline TOML document and validates it.
pub fn load_and_validate_str(toml_content: &str) -> Result<LumiereConfig, Vec<ConfigError>> {
    checked(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

/// `sources` is only consulted when extraction failed, to place error spans.
fn checked<F>(
    loaded: Result<LumiereConfig, figment::Error>,
    sources: F,
) -> Result<LumiereConfig, Vec<ConfigError>>
where
    F: FnOnce() -> Vec<(String, String)>,
{
    let config =
        loaded.map_err(|err| diagnostic::figment_to_config_errors(err, &sources()))?;
    validation::validate_config(&config)?;
    Ok(config)
}

/// Reads a TOML file keyed by the same absolute path figment records.
fn read_source(path: &Path) -> Option<(String, String)> {
    let content = std::fs::read_to_string(path).ok()?;
    let display = if path.is_relative() {
        std::env::current_dir()
            .map(|dir| dir.join(path).display().to_string())
            .unwrap_or_else(|_| path.display().to_string())
    } else {
        path.display().to_string()
    };
    Some((display, content))
}
