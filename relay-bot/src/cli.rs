//! CLI parser and config loading.

use clap::{Parser, Subcommand};

use crate::config::{BotConfig, ConfigError};

#[derive(Parser)]
#[command(name = "relay-bot")]
#[command(about = "Telegram bot that answers messages with Google Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Loads and validates BotConfig from the environment. `token` overrides TELEGRAM_BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig, ConfigError> {
    let config = BotConfig::load(token)?;
    config.validate()?;
    Ok(config)
}
