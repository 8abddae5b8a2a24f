//! Gemini implementation of [`LlmClient`]: wraps gemini-client and extracts plain text.

use anyhow::Result;
use async_trait::async_trait;
use gemini_client::{extract_text, GeminiClient};
use tracing::{debug, instrument};

use super::{LlmClient, DEFAULT_MODEL};

/// LlmClient backed by the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiLlmClient {
    client: GeminiClient,
    model: String,
}

impl GeminiLlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: GeminiClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: GeminiClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for GeminiLlmClient {
    #[instrument(skip(self, text), fields(model = %self.model))]
    async fn respond(&self, text: &str) -> Result<String> {
        let response = self.client.generate_content(&self.model, text).await?;
        let answer = extract_text(response.as_ref());
        debug!(answer_len = answer.chars().count(), "Gemini answer extracted");
        Ok(answer)
    }
}
