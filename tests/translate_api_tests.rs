// Integration tests for the /translate boundary
//
// The translator is scripted per target language so partial-failure
// behaviour can be pinned down without a network.

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use habla::transcribe::SpeechEngine;
use habla::translate::{TranslationOutcome, Translator, TRANSLATION_FAILED};
use habla::{create_router, AppState, Config};
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

struct UnusedEngine;

#[async_trait::async_trait]
impl SpeechEngine for UnusedEngine {
    async fn transcribe(&self, _samples: Vec<f32>) -> Result<String> {
        unreachable!("translate tests never hit the engine")
    }

    fn name(&self) -> &str {
        "unused"
    }
}

/// Returns a fixed outcome per target language.
struct ScriptedTranslator {
    outcomes: HashMap<String, TranslationOutcome>,
}

impl ScriptedTranslator {
    fn new(outcomes: &[(&str, TranslationOutcome)]) -> Self {
        Self {
            outcomes: outcomes
                .iter()
                .map(|(target, outcome)| (target.to_string(), outcome.clone()))
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl Translator for ScriptedTranslator {
    async fn translate(&self, _text: &str, source: &str, target: &str) -> TranslationOutcome {
        assert_eq!(source, "es");
        self.outcomes
            .get(target)
            .cloned()
            .unwrap_or_else(|| TranslationOutcome::Unavailable("unscripted target".into()))
    }
}

fn test_app(translator: ScriptedTranslator) -> axum::Router {
    let state = AppState::new(
        Arc::new(UnusedEngine),
        Arc::new(translator),
        Arc::new(Config::default()),
    );
    create_router(state)
}

fn translate_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/translate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn both_targets_translate() -> Result<()> {
    let app = test_app(ScriptedTranslator::new(&[
        ("en", TranslationOutcome::Translated("hello".into())),
        ("ar", TranslationOutcome::Translated("مرحبا".into())),
    ]));

    let response = app
        .oneshot(translate_request(serde_json::json!({ "text": "hola" })))
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["translation1"], "hello");
    assert_eq!(json["translation2"], "مرحبا");

    Ok(())
}

#[tokio::test]
async fn one_failed_target_degrades_to_placeholder() -> Result<()> {
    let app = test_app(ScriptedTranslator::new(&[
        ("en", TranslationOutcome::Translated("hello".into())),
        ("ar", TranslationOutcome::Unavailable("timed out".into())),
    ]));

    let response = app
        .oneshot(translate_request(serde_json::json!({ "text": "hola" })))
        .await?;

    // One slot failing never fails the request or the sibling slot.
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["translation1"], "hello");
    assert_eq!(json["translation2"], TRANSLATION_FAILED);

    Ok(())
}

#[tokio::test]
async fn empty_text_is_400() -> Result<()> {
    let app = test_app(ScriptedTranslator::new(&[]));

    let response = app
        .oneshot(translate_request(serde_json::json!({ "text": "" })))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());

    Ok(())
}

#[tokio::test]
async fn whitespace_only_text_is_400() -> Result<()> {
    let app = test_app(ScriptedTranslator::new(&[]));

    let response = app
        .oneshot(translate_request(serde_json::json!({ "text": " \t\n " })))
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn missing_text_field_is_400() -> Result<()> {
    let app = test_app(ScriptedTranslator::new(&[]));

    let response = app.oneshot(translate_request(serde_json::json!({}))).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn identical_requests_yield_identical_responses() -> Result<()> {
    let app = test_app(ScriptedTranslator::new(&[
        ("en", TranslationOutcome::Translated("good morning".into())),
        ("ar", TranslationOutcome::Translated("صباح الخير".into())),
    ]));

    let first = app
        .clone()
        .oneshot(translate_request(serde_json::json!({ "text": "buenos días" })))
        .await?;
    let second = app
        .oneshot(translate_request(serde_json::json!({ "text": "buenos días" })))
        .await?;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(first).await, body_json(second).await);

    Ok(())
}
