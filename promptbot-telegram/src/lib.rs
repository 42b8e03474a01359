//! # promptbot-telegram
//!
//! Telegram layer for the design-prompt bot: teloxide→core adapters, the
//! [`promptbot_core::Bot`] implementation, minimal env config, the axum
//! webhook receiver, and the webhook server runner. Handles only Telegram
//! connectivity and wiring; routing lives in the dispatch and handlers crates.

mod adapters;
mod bot_adapter;
mod config;
mod webhook;

pub use adapters::{TelegramUpdateWrapper, TelegramUserWrapper};
pub use bot_adapter::{TelegramBotAdapter, COPY_BUTTON_LABEL};
pub use config::BotConfig;
pub use webhook::{run_webhook, webhook_router, WEBHOOK_PATH};
