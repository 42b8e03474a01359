//! `/start` command handler.

use async_trait::async_trait;
use promptbot_core::{Handler, HandlerResponse, Message, ReplyMessage, Result};
use tracing::info;

pub const START_COMMAND: &str = "/start";

pub const WELCOME_REPLY: &str = "🎨 Welcome! Send me a design style, form, aesthetic approach, \
material, or functional element, and I'll generate an improved prompt!";

/// Replies with the welcome message on an exact `/start`. Anything else
/// (including `/start` with arguments) is passed on.
pub struct StartHandler;

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content.trim() != START_COMMAND {
            return Ok(HandlerResponse::Continue);
        }
        info!(user_id = message.user.id, "Start command received");
        Ok(HandlerResponse::Reply(ReplyMessage::text(WELCOME_REPLY)))
    }
}
