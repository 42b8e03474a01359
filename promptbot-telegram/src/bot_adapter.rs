//! Wraps teloxide::Bot and implements [`promptbot_core::Bot`]. Production code
//! sends replies via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use promptbot_core::{Bot as CoreBot, BotError, Chat, ReplyMessage, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup};

/// Label of the inline button attached to replies carrying a copy payload.
pub const COPY_BUTTON_LABEL: &str = "📋 Copy It";

/// Thin wrapper around teloxide::Bot that implements the core Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_reply(&self, chat: &Chat, reply: &ReplyMessage) -> Result<()> {
        match &reply.copy_payload {
            Some(payload) => {
                let keyboard = InlineKeyboardMarkup::new([[
                    InlineKeyboardButton::switch_inline_query(COPY_BUTTON_LABEL, payload.clone()),
                ]]);
                self.bot
                    .send_message(ChatId(chat.id), reply.text.clone())
                    .reply_markup(keyboard)
                    .await
                    .map_err(|e| BotError::Bot(e.to_string()))?;
                Ok(())
            }
            None => self.send_message(chat, &reply.text).await,
        }
    }
}
