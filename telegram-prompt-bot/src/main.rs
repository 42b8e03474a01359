//! Binary for the design-prompt Telegram bot: webhook receiver, FIFO update
//! queue, and a single dispatch worker routing to the canned handlers.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dispatch::HandlerChain;
use handlers::{PromptHandler, StartHandler, UnknownCommandHandler};
use promptbot_core::init_tracing;
use promptbot_telegram::{run_webhook, BotConfig};

#[derive(Parser)]
#[command(name = "telegram-prompt-bot", about = "Design-prompt Telegram bot")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs the webhook server and dispatch worker.
    Run {
        /// Bot token; overrides the BOT_TOKEN environment variable.
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            init_tracing(config.log_file.as_deref())?;

            let chain = HandlerChain::new()
                .add_handler(Arc::new(StartHandler))
                .add_handler(Arc::new(UnknownCommandHandler))
                .add_handler(Arc::new(PromptHandler));

            run_webhook(config, chain).await
        }
    }
}
