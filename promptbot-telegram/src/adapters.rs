//! Adapters from Telegram (teloxide) types to promptbot_core types.
//! Depends only on teloxide and promptbot_core type definitions.

use promptbot_core::{Chat, InboundUpdate, Message, ToCoreUpdate, ToCoreUser, User};
use teloxide::types::UpdateKind;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Update for conversion to core [`InboundUpdate`].
/// Only text messages carry a body; every other update kind (edited messages,
/// media without text, member updates) converts with `message: None` and is
/// dropped downstream by the dispatch worker.
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Update);

impl<'a> ToCoreUpdate for TelegramUpdateWrapper<'a> {
    fn to_core(&self) -> InboundUpdate {
        let message = match &self.0.kind {
            UpdateKind::Message(msg) => msg.text().map(|text| Message {
                id: msg.id.to_string(),
                user: msg
                    .from
                    .as_ref()
                    .map(|u| TelegramUserWrapper(u).to_core())
                    .unwrap_or_else(|| User {
                        id: 0,
                        username: None,
                        first_name: None,
                        last_name: None,
                    }),
                chat: Chat {
                    id: msg.chat.id.0,
                    chat_type: chat_type_name(&msg.chat).to_string(),
                },
                content: text.to_string(),
                created_at: chrono::Utc::now(),
            }),
            _ => None,
        };

        InboundUpdate {
            id: i64::from(self.0.id.0),
            message,
        }
    }
}

fn chat_type_name(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}
