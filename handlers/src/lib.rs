//! # Handlers for the design-prompt bot
//!
//! This crate provides the handler implementations: start command, unknown
//! command fallback, and the free-text prompt composer. Routing is chain
//! order — register start first, then the command fallback, then the prompt
//! handler.

mod prompt_handler;
mod start_handler;
mod unknown_command;

#[cfg(test)]
mod test;

pub use prompt_handler::{PromptHandler, NO_MATCH_REPLY};
pub use start_handler::{StartHandler, START_COMMAND, WELCOME_REPLY};
pub use unknown_command::{UnknownCommandHandler, UNKNOWN_COMMAND_REPLY};
