//! Relay handler: forwards a question to the LLM and sends the answer as a threaded reply.
//!
//! Failures stay inside one message: an LLM error or a failed send turns into
//! [`APOLOGY_MESSAGE`] for that message only.

use async_trait::async_trait;
use llm_client::LlmClient;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

use crate::core::{Bot, Handler, HandlerResponse, Message, Result};
use crate::inbound::{classify, Inbound};

pub const APOLOGY_MESSAGE: &str =
    "Sorry, I can't reach Google AI Studio right now. Please try again later.";

pub struct RelayHandler {
    llm_client: Arc<dyn LlmClient>,
    bot: Arc<dyn Bot>,
    bot_username: Option<String>,
}

impl RelayHandler {
    pub fn new(llm_client: Arc<dyn LlmClient>, bot: Arc<dyn Bot>, bot_username: Option<String>) -> Self {
        Self {
            llm_client,
            bot,
            bot_username,
        }
    }

    /// Logs error and its cause chain. First item with `first_msg`, rest with "Caused by".
    fn log_error_chain(e: &anyhow::Error, first_msg: &str) {
        for (i, cause) in e.chain().enumerate() {
            if i == 0 {
                error!(cause = %cause, "{}", first_msg);
            } else {
                error!(cause = %cause, "Caused by");
            }
        }
    }

    #[instrument(skip(self, message, question), fields(chat_id = message.chat.id, message_id = %message.id))]
    async fn relay(&self, message: &Message, question: &str) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            question_len = question.chars().count(),
            "Forwarding question to LLM"
        );

        let answer = match self.llm_client.respond(question).await {
            Ok(answer) => answer,
            Err(e) => {
                Self::log_error_chain(&e, "LLM call failed");
                APOLOGY_MESSAGE.to_string()
            }
        };

        match self.bot.reply_to(message, &answer).await {
            Ok(()) => {
                info!(reply_len = answer.chars().count(), "Reply sent");
                Ok(HandlerResponse::Reply(answer))
            }
            Err(e) if answer != APOLOGY_MESSAGE => {
                error!(error = %e, "Failed to send reply, sending apology instead");
                self.bot.reply_to(message, APOLOGY_MESSAGE).await?;
                Ok(HandlerResponse::Reply(APOLOGY_MESSAGE.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match classify(message, self.bot_username.as_deref()) {
            Inbound::Query(question) => self.relay(message, question).await,
            Inbound::Greeting => Ok(HandlerResponse::Continue),
            Inbound::Ignored(reason) => {
                debug!(chat_id = message.chat.id, reason = ?reason, "Message ignored");
                Ok(HandlerResponse::Ignore)
            }
        }
    }
}
