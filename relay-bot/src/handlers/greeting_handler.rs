//! Greeting handler: answers `/start` with a fixed welcome text.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::inbound::{classify, Inbound};

pub const WELCOME_MESSAGE: &str =
    "Hello! Send me your question and I'll ask Google AI Studio (Gemini) for you.";

/// Sends [`WELCOME_MESSAGE`] to the chat on `/start` and stops the chain; continues otherwise.
pub struct GreetingHandler {
    bot: Arc<dyn Bot>,
    bot_username: Option<String>,
}

impl GreetingHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: Option<String>) -> Self {
        Self { bot, bot_username }
    }
}

#[async_trait]
impl Handler for GreetingHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if classify(message, self.bot_username.as_deref()) != Inbound::Greeting {
            return Ok(HandlerResponse::Continue);
        }

        info!(user_id = message.user.id, chat_id = message.chat.id, "Sending welcome message");
        self.bot.send_message(&message.chat, WELCOME_MESSAGE).await?;
        Ok(HandlerResponse::Reply(WELCOME_MESSAGE.to_string()))
    }
}
