// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini `generateContent` endpoint.
//!
//! Provides [`GeminiClient`] which handles request construction,
//! authentication, and error mapping. Each call is a single attempt.

use std::time::Duration;

use lumiere_core::LumiereError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// HTTP client for Gemini API communication.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Creates a new Gemini API client.
    ///
    /// # Arguments
    /// * `api_key` - Gemini API key, sent as `x-goog-api-key`
    /// * `model` - Model identifier (e.g., "gemini-3-flash-preview")
    /// * `base_url` - API root, without trailing `/models`
    /// * `timeout` - Whole-request timeout
    pub fn new(
        api_key: &str,
        model: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, LumiereError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).map_err(|e| {
                LumiereError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| LumiereError::provider(format!("failed to build HTTP client: {e}"), e))?;

        Ok(Self {
            client,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full URL of the `generateContent` call for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Sends one `generateContent` request and returns the parsed response.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LumiereError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "generateContent response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!(
                    "Gemini API error ({} {}): {}",
                    api_err.error.code, api_err.error.status, api_err.error.message
                ),
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(LumiereError::Provider {
                message,
                source: None,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_send_error(e))?;
        serde_json::from_str(&body).map_err(|e| LumiereError::MalformedOutput {
            message: format!("failed to parse generateContent response: {e}"),
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> LumiereError {
        if e.is_timeout() {
            LumiereError::Timeout {
                duration: self.timeout,
            }
        } else {
            LumiereError::provider(format!("HTTP request failed: {e}"), e)
        }
    }
}
