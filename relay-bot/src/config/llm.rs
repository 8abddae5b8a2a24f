//! Gemini settings.

use llm_client::{resolve_model, DEFAULT_BASE_URL};

use super::base::non_blank_var;
use super::error::ConfigError;

#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// GOOGLE_API_KEY
    pub api_key: String,
    /// GOOGLE_MODEL, default `gemini-1.5-flash`
    pub model: String,
    /// GOOGLE_API_BASE_URL, default the public v1beta endpoint
    pub base_url: String,
}

impl LlmSettings {
    pub fn from_env(api_key: String) -> Self {
        let model = resolve_model(non_blank_var("GOOGLE_MODEL").as_deref());
        let base_url =
            non_blank_var("GOOGLE_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            api_key,
            model,
            base_url,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            return Err(ConfigError::InvalidUrl {
                name: "GOOGLE_API_BASE_URL".to_string(),
                value: self.base_url.clone(),
            });
        }
        Ok(())
    }
}
