use super::{TranslationOutcome, Translator};
use crate::config::TranslationConfig;
use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Client for the public Google Translate web endpoint.
///
/// One GET per target language; the response is a nested JSON array whose
/// first element holds the translated-text fragments.
#[derive(Clone)]
pub struct GoogleWebTranslator {
    endpoint: String,
    http: Client,
}

impl GoogleWebTranslator {
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            http,
        })
    }

    async fn fetch(&self, text: &str, source: &str, target: &str) -> TranslationOutcome {
        let response = match self
            .http
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return TranslationOutcome::Unavailable(e.to_string()),
        };

        if !response.status().is_success() {
            return TranslationOutcome::Unavailable(format!(
                "endpoint returned {}",
                response.status()
            ));
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => return TranslationOutcome::Unavailable(format!("malformed response: {e}")),
        };

        match extract_translation(&body) {
            Some(text) => TranslationOutcome::Translated(text),
            None => TranslationOutcome::Unavailable("no translation in response".to_string()),
        }
    }
}

/// Concatenate the position-0 text fragments of the payload's first element.
///
/// An empty or missing first element is treated as a failure, matching the
/// upstream endpoint's falsy-result contract.
fn extract_translation(body: &Value) -> Option<String> {
    let fragments = body.get(0)?.as_array()?;

    let mut translated = String::new();
    for fragment in fragments {
        if let Some(piece) = fragment.get(0).and_then(Value::as_str) {
            translated.push_str(piece);
        }
    }

    if translated.is_empty() {
        None
    } else {
        Some(translated)
    }
}

#[async_trait::async_trait]
impl Translator for GoogleWebTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str) -> TranslationOutcome {
        self.fetch(text, source, target).await
    }
}
