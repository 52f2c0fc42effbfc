// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini `generateContent` request/response types and the gift output schema.

use std::collections::BTreeMap;

use lumiere_core::Theme;
use serde::{Deserialize, Serialize};

// --- Request types ---

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// A turn of conversation content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-part user turn.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

/// One part of a content turn. Only text parts are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Structured-output settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Schema,
}

/// OpenAPI-subset schema node as accepted by `responseSchema`.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
}

impl Schema {
    fn string() -> Self {
        Self {
            schema_type: "STRING".to_string(),
            properties: None,
            required: None,
            enum_values: None,
        }
    }

    /// Schema for a generated gift: `giftName`, `message`, and a `theme`
    /// restricted to the generatable themes. All three are required.
    pub fn gift() -> Self {
        let mut theme = Self::string();
        theme.enum_values = Some(
            Theme::GENERATABLE
                .iter()
                .map(ToString::to_string)
                .collect(),
        );

        let mut properties = BTreeMap::new();
        properties.insert("giftName".to_string(), Self::string());
        properties.insert("message".to_string(), Self::string());
        properties.insert("theme".to_string(), theme);

        Self {
            schema_type: "OBJECT".to_string(),
            properties: Some(properties),
            required: Some(vec![
                "giftName".to_string(),
                "message".to_string(),
                "theme".to_string(),
            ]),
            enum_values: None,
        }
    }
}

impl GenerationConfig {
    /// JSON output constrained to [`Schema::gift`].
    pub fn gift_json() -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: Schema::gift(),
        }
    }
}

// --- Response types ---

/// Response body of `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub model_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}
