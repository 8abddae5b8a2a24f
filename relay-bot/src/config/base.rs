//! Base config: Telegram connection and logging.

use std::env;

use super::error::ConfigError;

/// Telegram + logging settings.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_BOT_TOKEN (or `--token`)
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE; stdout only when unset
    pub log_file: Option<String>,
}

impl BaseConfig {
    /// Reads the optional settings from env around an already-resolved token.
    pub fn from_env(bot_token: String) -> Self {
        let telegram_api_url =
            non_blank_var("TELEGRAM_API_URL").or_else(|| non_blank_var("TELOXIDE_API_URL"));
        let log_file = non_blank_var("LOG_FILE");
        Self {
            bot_token,
            telegram_api_url,
            log_file,
        }
    }

    /// telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(ConfigError::InvalidUrl {
                    name: "TELEGRAM_API_URL".to_string(),
                    value: url_str.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Env var value trimmed, `None` when absent or blank.
pub(crate) fn non_blank_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
