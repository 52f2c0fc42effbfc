// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Lumiere.

use thiserror::Error;

/// The primary error type used across Lumiere adapter traits and core operations.
#[derive(Debug, Error)]
pub enum LumiereError {
    /// Configuration errors (missing credentials, invalid header values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Generation provider errors (network failure, non-success status).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider answered, but not with the required gift schema.
    #[error("malformed provider output: {message}")]
    MalformedOutput { message: String },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl LumiereError {
    /// Builds a [`LumiereError::Provider`] from a message and an underlying error.
    pub fn provider(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LumiereError::Provider {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
