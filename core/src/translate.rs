/// Translation-service contract and the Google endpoint client
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation response for '{language}' was malformed: {detail}")]
    MalformedResponse { language: String, detail: String },
}

/// The external translation contract:
/// `(source text, target language) -> translated text`. Assumed to be
/// attempted exactly once per triple; there is no retry anywhere.
#[allow(async_fn_in_trait)]
pub trait Translator {
    async fn translate(&self, text: &str, target_language: &str)
        -> Result<String, TranslationError>;
}

/// Client for the public Google translate endpoint. The response is a
/// nested-array payload whose first leaf is the translated text.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new() -> Result<Self, TranslationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Points the client at a different endpoint, e.g. a test server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

fn first_leaf(payload: &Value) -> Option<&str> {
    payload.get(0)?.get(0)?.get(0)?.as_str()
}

impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "en"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?;

        let payload: Value = response.json().await?;
        first_leaf(&payload)
            .map(str::to_string)
            .ok_or_else(|| TranslationError::MalformedResponse {
                language: target_language.to_string(),
                detail: "expected a nested array whose first leaf is the translated text".into(),
            })
    }
}
