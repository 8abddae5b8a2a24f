//! Bot configuration: BaseConfig (Telegram + log) + LlmSettings (Gemini). Loaded from env.

mod base;
mod bot_config;
mod error;
mod llm;


pub use base::BaseConfig;
pub use bot_config::{BotConfig, GOOGLE_API_KEY, TELEGRAM_BOT_TOKEN};
pub use error::{ConfigError, MissingSetting};
pub use llm::LlmSettings;
