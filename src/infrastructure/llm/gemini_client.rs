use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::infrastructure::observability::redact_secrets;
use crate::presentation::config::LlmSettings;

const REPLY_TEXT_POINTER: &str = "/candidates/0/content/parts/0/text";

/// Client for the Gemini `generateContent` endpoint.
///
/// Every call is single-turn: only the submitted text is sent.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmClientError::Transport(e.without_url().to_string()))?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent?key={}",
                base_url.trim_end_matches('/'),
                model,
                api_key
            ),
        })
    }

    pub fn from_settings(settings: &LlmSettings) -> Result<Self, LlmClientError> {
        Self::new(
            &settings.base_url,
            &settings.model,
            &settings.api_key,
            settings.request_timeout_secs.map(Duration::from_secs),
        )
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[tracing::instrument(skip_all, fields(endpoint = %redact_secrets(&self.endpoint)))]
    async fn generate(&self, text: &str) -> Result<Option<String>, LlmClientError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::Transport(e.without_url().to_string()))?;

        // The status code is not trusted: Gemini reports failures in the body.
        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            if e.is_decode() {
                LlmClientError::InvalidResponse(e.without_url().to_string())
            } else {
                LlmClientError::Transport(e.without_url().to_string())
            }
        })?;

        tracing::debug!(status = %status, response = %body, "Provider raw response");

        parse_generate_response(&body)
    }
}

/// Extracts the reply from a decoded `generateContent` response.
pub fn parse_generate_response(body: &Value) -> Result<Option<String>, LlmClientError> {
    if let Some(error) = body.get("error").filter(|e| is_truthy(e)) {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(LlmClientError::Provider(message));
    }

    Ok(body
        .pointer(REPLY_TEXT_POINTER)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
