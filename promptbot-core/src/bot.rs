//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in
//! promptbot-telegram. Tests substitute mpsc-backed mocks.

use crate::error::Result;
use crate::types::{Chat, ReplyMessage};
use async_trait::async_trait;

/// Abstraction for sending messages back to a chat.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a composed reply; the transport renders `copy_payload` as an
    /// inline copy button when present.
    async fn send_reply(&self, chat: &Chat, reply: &ReplyMessage) -> Result<()>;
}
