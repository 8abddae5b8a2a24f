//! Telegram layer: type adapters, Bot implementation, polling runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{split_message, TelegramBotAdapter, TELEGRAM_MAX_MESSAGE_CHARS};
pub use runner::{build_dispatcher, request_shutdown, run_polling, run_polling_until};
