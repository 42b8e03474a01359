//! Minimal bot config: token, port, API URL, log path, handler timeout.
//! External interactions: loaded from the environment variables BOT_TOKEN,
//! PORT, TELEGRAM_API_URL, LOG_FILE, HANDLER_TIMEOUT_SECS.

use anyhow::Result;
use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HANDLER_TIMEOUT_SECS: u64 = 30;

/// Bot configuration (Telegram access, webhook port, logging, dispatch limits).
pub struct BotConfig {
    pub bot_token: String,
    /// Webhook server port; binds all interfaces.
    pub port: u16,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
    /// Per-update handler timeout for the dispatch worker.
    pub handler_timeout: Duration,
}

impl BotConfig {
    /// Loads from environment variables: BOT_TOKEN required, the rest
    /// optional with defaults (PORT 5000, HANDLER_TIMEOUT_SECS 30).
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Like [`BotConfig::from_env`], but a given token takes precedence over
    /// the BOT_TOKEN environment variable.
    pub fn load(token_override: Option<String>) -> Result<Self> {
        let bot_token = match token_override {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        let handler_timeout_secs = match env::var("HANDLER_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("HANDLER_TIMEOUT_SECS is not a number: {}", raw))?,
            Err(_) => DEFAULT_HANDLER_TIMEOUT_SECS,
        };
        Ok(Self {
            bot_token,
            port,
            telegram_api_url,
            log_file,
            handler_timeout: Duration::from_secs(handler_timeout_secs),
        })
    }

    /// Uses the given token with defaults for everything else.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            port: DEFAULT_PORT,
            telegram_api_url: None,
            log_file: None,
            handler_timeout: Duration::from_secs(DEFAULT_HANDLER_TIMEOUT_SECS),
        }
    }
}
