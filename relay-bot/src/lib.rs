//! # Telegram → Gemini relay bot
//!
//! Receives text messages by long polling, forwards each question to Gemini and replies in the
//! same chat. `/start` gets a welcome text; other commands and empty messages are ignored.

pub mod chain;
pub mod cli;
pub mod config;
pub mod core;
pub mod handlers;
pub mod inbound;
pub mod lifecycle;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, parse_message_id, Bot, Chat, Handler, HandlerResponse, Message, RelayError,
    Result, ToCoreMessage, ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use config::{BotConfig, ConfigError};
pub use handlers::{GreetingHandler, RelayHandler, APOLOGY_MESSAGE, WELCOME_MESSAGE};
pub use inbound::{classify, IgnoreReason, Inbound};
pub use lifecycle::{Lifecycle, LifecycleState};
pub use runner::{build_handler_chain, run_bot};
pub use telegram::{
    request_shutdown, run_polling, run_polling_until, TelegramBotAdapter, TelegramMessageWrapper,
    TelegramUserWrapper,
};
