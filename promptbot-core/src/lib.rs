//! # promptbot-core
//!
//! Core types and traits for the design-prompt bot: [`Bot`], [`Handler`], update and reply
//! types, and tracing initialization. Transport-agnostic; used by promptbot-telegram,
//! dispatch, and handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, InboundUpdate, Message, ReplyMessage, ToCoreUpdate,
    ToCoreUser, User,
};
