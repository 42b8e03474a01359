//! Core types: user, chat, message, inbound update, reply, and the Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (group or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound text message with its user and chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One webhook-delivered update. `message` is `None` when the update carries no
/// text message body (edited messages, member updates, media without text) —
/// the dispatch worker drops those with a log line and no reply.
#[derive(Debug, Clone)]
pub struct InboundUpdate {
    pub id: i64,
    pub message: Option<Message>,
}

/// A composed reply. `copy_payload`, when set, is rendered by the transport
/// layer as an inline "copy" button carrying the payload text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyMessage {
    pub text: String,
    pub copy_payload: Option<String>,
}

impl ReplyMessage {
    /// Plain text reply without a copy button.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            copy_payload: None,
        }
    }

    /// Reply with a copy button carrying `payload`.
    pub fn with_copy_payload(text: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            copy_payload: Some(payload.into()),
        }
    }
}

/// Handler result for the chain. `Reply` carries the response body; the first
/// handler returning `Stop` or `Reply` ends the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Stop the chain and reply with the given message.
    Reply(ReplyMessage),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific update type to core [`InboundUpdate`].
pub trait ToCoreUpdate: Send + Sync {
    fn to_core(&self) -> InboundUpdate;
}

/// A routine bound to one trigger (a command or a text pattern). Handlers are
/// run in chain order; a handler whose trigger does not match returns
/// `Continue` so the next handler can try.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Processes the message. Return Stop or Reply to end the chain.
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}
