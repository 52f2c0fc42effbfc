// SPDX-FileCopyrightText: 2026 Lumiere Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests of the Gemini generator against a mock HTTP server.

use std::time::Duration;

use lumiere_config::LumiereConfig;
use lumiere_core::{GiftGenerator, LumiereError, Theme};
use lumiere_gemini::GeminiGenerator;
use lumiere_gemini::client::GeminiClient;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> LumiereConfig {
    let mut config = LumiereConfig::default();
    config.gemini.api_key = Some("test-key".into());
    config.gemini.model = "gemini-test".into();
    config.gemini.base_url = server.uri();
    config.gemini.timeout_secs = 5;
    config
}

fn answer(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn generates_gift_from_structured_answer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": {"responseMimeType": "application/json"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer(
            r#"{"giftName":"Retro Radio","message":"Let the music move you.","theme":"classic"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let generator = GeminiGenerator::from_config(&config_for(&server))
        .unwrap()
        .expect("key is configured");
    assert_eq!(generator.name(), "gemini");

    let gift = generator.generate("Mina").await.unwrap();
    assert_eq!(gift.gift_name, "Retro Radio");
    assert_eq!(gift.theme, Theme::Classic);
}

#[tokio::test]
async fn injected_client_sets_model_and_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-custom:generateContent"))
        .and(header("x-goog-api-key", "injected-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer(
            r#"{"giftName":"Snow Globe","message":"Shake it gently.","theme":"whimsical"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(
        "injected-key",
        "gemini-custom".into(),
        &server.uri(),
        Duration::from_secs(5),
    )
    .unwrap();
    let generator = GeminiGenerator::with_client(client);

    let gift = generator.generate("Ivy").await.unwrap();
    assert_eq!(gift.gift_name, "Snow Globe");
    assert_eq!(gift.recipient_name, "Ivy");
}

#[tokio::test]
async fn prompt_carries_recipient_name() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"role": "user"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer(
            r#"{"giftName":"Toy Car","message":"Zoom!","theme":"whimsical"}"#,
        )))
        .mount(&server)
        .await;

    let generator = GeminiGenerator::from_config(&config_for(&server))
        .unwrap()
        .unwrap();
    generator.generate("Zoe").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(text.contains("someone named Zoe."));
}

#[tokio::test]
async fn server_error_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": {"code": 500, "message": "internal", "status": "INTERNAL"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = GeminiGenerator::from_config(&config_for(&server))
        .unwrap()
        .unwrap();
    let err = generator.generate("Mina").await.unwrap_err();
    assert!(matches!(err, LumiereError::Provider { .. }), "got: {err}");
}

#[tokio::test]
async fn non_json_answer_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer("a lovely scarf")))
        .mount(&server)
        .await;

    let generator = GeminiGenerator::from_config(&config_for(&server))
        .unwrap()
        .unwrap();
    let err = generator.generate("Mina").await.unwrap_err();
    assert!(matches!(err, LumiereError::MalformedOutput { .. }), "got: {err}");
}

#[tokio::test]
async fn out_of_schema_theme_is_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer(
            r#"{"giftName":"Socks","message":"Warm feet.","theme":"cozy"}"#,
        )))
        .mount(&server)
        .await;

    let generator = GeminiGenerator::from_config(&config_for(&server))
        .unwrap()
        .unwrap();
    let err = generator.generate("Mina").await.unwrap_err();
    assert!(matches!(err, LumiereError::MalformedOutput { .. }), "got: {err}");
}

#[tokio::test]
async fn empty_candidates_are_malformed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": []
        })))
        .mount(&server)
        .await;

    let generator = GeminiGenerator::from_config(&config_for(&server))
        .unwrap()
        .unwrap();
    let err = generator.generate("Mina").await.unwrap_err();
    assert!(err.to_string().contains("no text candidate"), "got: {err}");
}
