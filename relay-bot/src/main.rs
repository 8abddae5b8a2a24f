//! relay-bot binary: `relay-bot run [--token <TOKEN>]`.

use clap::Parser;
use relay_bot::{init_tracing, load_config, run_bot, Cli, Commands};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => run(token).await,
    }
}

async fn run(token: Option<String>) -> ExitCode {
    let config = match load_config(token) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(config.log_file()) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run_bot(config).await {
        Ok(()) => {
            info!("Bot stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Bot exited with error");
            ExitCode::FAILURE
        }
    }
}
