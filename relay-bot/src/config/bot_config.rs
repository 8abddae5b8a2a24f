//! BotConfig: BaseConfig + LlmSettings. Use [`BotConfig::load`] for env-based loading.

use super::base::non_blank_var;
use super::error::{ConfigError, MissingSetting};
use super::{BaseConfig, LlmSettings};

pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";

const BOT_TOKEN_PURPOSE: &str = "Telegram bot token from @BotFather.";
const API_KEY_PURPOSE: &str = "API key created at https://aistudio.google.com/app/apikey.";

/// Full bot config.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub llm: LlmSettings,
}

impl BotConfig {
    /// Loads from environment variables. A non-blank `token` overrides TELEGRAM_BOT_TOKEN.
    ///
    /// Fails with every missing required setting listed, not only the first.
    pub fn load(token: Option<String>) -> Result<Self, ConfigError> {
        let bot_token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .or_else(|| non_blank_var(TELEGRAM_BOT_TOKEN));
        let api_key = non_blank_var(GOOGLE_API_KEY);

        match (bot_token, api_key) {
            (Some(bot_token), Some(api_key)) => Ok(Self {
                base: BaseConfig::from_env(bot_token),
                llm: LlmSettings::from_env(api_key),
            }),
            (bot_token, api_key) => {
                let mut missing = Vec::new();
                if bot_token.is_none() {
                    missing.push(MissingSetting {
                        name: TELEGRAM_BOT_TOKEN,
                        purpose: BOT_TOKEN_PURPOSE,
                    });
                }
                if api_key.is_none() {
                    missing.push(MissingSetting {
                        name: GOOGLE_API_KEY,
                        purpose: API_KEY_PURPOSE,
                    });
                }
                Err(ConfigError::MissingRequired(missing))
            }
        }
    }

    /// Checks URL-valued settings. Call after load() to fail fast before connecting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.base.validate()?;
        self.llm.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn llm(&self) -> &LlmSettings {
        &self.llm
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> Option<&str> {
        self.base.log_file.as_deref()
    }
    pub fn model(&self) -> &str {
        &self.llm.model
    }
}
