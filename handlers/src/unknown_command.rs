//! Fallback for command-prefixed text no other command handler claimed.

use async_trait::async_trait;
use promptbot_core::{Handler, HandlerResponse, Message, ReplyMessage, Result};
use tracing::info;

pub const UNKNOWN_COMMAND_REPLY: &str = "Unknown command. Try /start.";

/// Replies with a fixed "Unknown command" message for any `/`-prefixed text.
/// Register after the real command handlers and before the free-text handler,
/// so free text never reaches it and unrecognized commands never reach the
/// prompt composer.
pub struct UnknownCommandHandler;

#[async_trait]
impl Handler for UnknownCommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.content.trim_start().starts_with('/') {
            return Ok(HandlerResponse::Continue);
        }
        info!(
            user_id = message.user.id,
            command = %message.content,
            "Unknown command"
        );
        Ok(HandlerResponse::Reply(ReplyMessage::text(
            UNKNOWN_COMMAND_REPLY,
        )))
    }
}
