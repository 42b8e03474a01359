//! Free-text handler: composes the improved design prompt from the category
//! tables, or replies with the help message when nothing matches.

use async_trait::async_trait;
use promptbot_core::{Handler, HandlerResponse, Message, ReplyMessage, Result};
use tracing::info;

pub const NO_MATCH_REPLY: &str = "❌ I didn't recognize any design parameters. \
Try something like 'brutalist', 'round', or 'ergonomic'.";

/// Terminal handler for free text. A composer hit replies with the composed
/// prompt plus a copy button carrying the same text; a miss replies with the
/// fixed help message. Never returns Continue.
pub struct PromptHandler;

#[async_trait]
impl Handler for PromptHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match prompt::compose(&message.content) {
            Some(composed) => {
                info!(
                    user_id = message.user.id,
                    prompt_len = composed.len(),
                    "Prompt composed"
                );
                Ok(HandlerResponse::Reply(ReplyMessage::with_copy_payload(
                    composed.clone(),
                    composed,
                )))
            }
            None => {
                info!(
                    user_id = message.user.id,
                    message_content = %message.content,
                    "No design parameter matched"
                );
                Ok(HandlerResponse::Reply(ReplyMessage::text(NO_MATCH_REPLY)))
            }
        }
    }
}
