//! Wraps teloxide::Bot and implements [`crate::core::Bot`].

use crate::core::{parse_message_id, Bot as CoreBot, Chat, Message, RelayError, Result};
use async_trait::async_trait;
use teloxide::{
    payloads::SendMessageSetters,
    prelude::*,
    types::{ChatId, MessageId, ReplyParameters},
};
use tracing::debug;

/// Telegram rejects longer message texts.
pub const TELEGRAM_MAX_MESSAGE_CHARS: usize = 4096;

/// Splits `text` into consecutive chunks of at most `max_chars` characters, on char boundaries.
/// Empty text yields no chunks.
pub fn split_message(text: &str, max_chars: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(cut);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

/// Thin wrapper around teloxide::Bot.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    async fn send_chunks(&self, chat: &Chat, text: &str, reply_to: Option<MessageId>) -> Result<()> {
        let chunks = split_message(text, TELEGRAM_MAX_MESSAGE_CHARS);
        if chunks.is_empty() {
            return Err(RelayError::Bot("refusing to send an empty message".to_string()));
        }
        if chunks.len() > 1 {
            debug!(chat_id = chat.id, chunks = chunks.len(), "Splitting long message");
        }
        for chunk in chunks {
            let request = self.bot.send_message(ChatId(chat.id), chunk);
            let request = match reply_to {
                Some(id) => request.reply_parameters(ReplyParameters::new(id)),
                None => request,
            };
            request.await.map_err(|e| RelayError::Bot(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_chunks(chat, text, None).await
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let id = parse_message_id(&message.id)?;
        self.send_chunks(&message.chat, text, Some(MessageId(id))).await
    }
}
