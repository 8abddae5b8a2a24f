//! Startup wiring: builds the Telegram and Gemini clients, the handler chain and the lifecycle
//! controller, then hands over to the polling runner.

use llm_client::{GeminiLlmClient, LlmClient};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, instrument, warn};

use crate::chain::HandlerChain;
use crate::config::{BaseConfig, BotConfig, ConfigError};
use crate::core::{Bot as CoreBot, Result};
use crate::handlers::{GreetingHandler, RelayHandler};
use crate::lifecycle::Lifecycle;
use crate::telegram::{run_polling, TelegramBotAdapter};

/// Greeting first so `/start` never reaches the model.
pub fn build_handler_chain(
    bot: Arc<dyn CoreBot>,
    llm_client: Arc<dyn LlmClient>,
    bot_username: Option<String>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(GreetingHandler::new(bot.clone(), bot_username.clone())))
        .add_handler(Arc::new(RelayHandler::new(llm_client, bot, bot_username)))
}

/// Builds the teloxide bot, pointing it at a custom Bot API server when configured.
pub fn build_teloxide_bot(base: &BaseConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(base.bot_token.clone());
    match base.telegram_api_url.as_deref() {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str).map_err(|_| ConfigError::InvalidUrl {
                name: "TELEGRAM_API_URL".to_string(),
                value: url_str.to_string(),
            })?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Asks Telegram for the bot's username; used to recognise `/start@username`.
async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            info!(username = ?username, "Bot identity fetched");
            username
        }
        Err(e) => {
            warn!(error = %e, "getMe failed; /start@username will match any bot");
            None
        }
    }
}

/// Main entry after config and logging: build clients and handlers, then poll until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    let teloxide_bot = build_teloxide_bot(config.base())?;
    let bot_username = fetch_bot_username(&teloxide_bot).await;

    let llm = config.llm();
    info!(model = %llm.model, base_url = %llm.base_url, "Using Gemini model");
    let llm_client: Arc<dyn LlmClient> = Arc::new(
        GeminiLlmClient::with_base_url(llm.api_key.clone(), llm.base_url.clone())
            .with_model(llm.model.clone()),
    );

    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(bot, llm_client, bot_username);
    let lifecycle = Arc::new(Lifecycle::new());

    info!("Bot is ready, starting polling");
    run_polling(teloxide_bot, handler_chain, lifecycle).await
}
