//! # Dispatch
//!
//! Update ingestion and dispatch for the bot: the webhook receiver enqueues
//! decoded updates into an [`UpdateQueue`]; a single [`DispatchWorker`] drains
//! the queue in strict FIFO order and routes each update through a
//! [`HandlerChain`]. A failing or hung handler is logged and skipped; it never
//! halts the pipeline (at-most-once, best-effort delivery).

mod chain;
mod queue;
mod worker;

pub use chain::HandlerChain;
pub use queue::{UpdateQueue, UpdateReceiver};
pub use worker::DispatchWorker;
