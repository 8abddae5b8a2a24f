//! # Gemini API client
//!
//! Thin wrapper around the Gemini REST `generateContent` endpoint, built on [reqwest].
//! Provides token masking for safe logging and lenient text extraction from responses
//! (see [`extract_text`]).

use anyhow::Context;
use serde_json::{json, Value};

mod response;

pub use response::{extract_text, Candidate, Content, Part, ResponseShape, NO_RESPONSE_PLACEHOLDER};

/// Public Gemini REST endpoint (v1beta).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = chars[..7].iter().collect();
        let tail: String = chars[len - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}

/// Gemini client. Cheap to clone; the underlying HTTP connection pool is shared.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    /// Base URL without trailing slash, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    base_url: String,
}

impl GeminiClient {
    /// Builds a client for the public endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client with a custom base URL (proxies, compatible endpoints, tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_key, base_url)
    }

    /// Builds a client from an existing reqwest client.
    pub fn with_client(http: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `text` as a single user turn to `model` and returns the raw JSON response.
    ///
    /// Returns `Ok(None)` when the service answers with an empty or `null` body. Transport
    /// failures, non-success statuses and non-JSON bodies are errors.
    pub async fn generate_content(&self, model: &str, text: &str) -> anyhow::Result<Option<Value>> {
        let model = model.trim_start_matches("models/");
        tracing::info!(
            model = %model,
            text_len = text.chars().count(),
            api_key = %mask_token(&self.api_key),
            "Gemini generateContent request"
        );
        tracing::debug!(text = %text, "Gemini generateContent request text");

        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = json!({
            "contents": [
                { "role": "user", "parts": [ { "text": text } ] }
            ]
        });

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .context("Gemini generateContent request failed")?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .context("Failed to read Gemini response body")?;

        if !status.is_success() {
            anyhow::bail!("Gemini returned {}: {}", status, raw.trim());
        }

        if raw.trim().is_empty() {
            tracing::warn!(model = %model, "Gemini generateContent returned an empty body");
            return Ok(None);
        }

        let value: Value =
            serde_json::from_str(&raw).context("Gemini response body is not valid JSON")?;
        if value.is_null() {
            return Ok(None);
        }

        if let Some(usage) = value.get("usageMetadata") {
            let count = |field: &str| usage.get(field).and_then(Value::as_u64);
            let (prompt_tokens, candidates_tokens, total_tokens) = (
                count("promptTokenCount"),
                count("candidatesTokenCount"),
                count("totalTokenCount"),
            );
            tracing::info!(
                prompt_tokens = ?prompt_tokens,
                candidates_tokens = ?candidates_tokens,
                total_tokens = ?total_tokens,
                "Gemini generateContent usage"
            );
        }

        Ok(Some(value))
    }
}
