//! In-process FIFO buffer between the webhook receiver and the dispatch
//! worker. Single producer (the HTTP handler), single consumer (the worker).

use promptbot_core::InboundUpdate;
use tokio::sync::mpsc;
use tracing::warn;

/// Receiving half of the queue, owned by the [`crate::DispatchWorker`].
pub type UpdateReceiver = mpsc::UnboundedReceiver<InboundUpdate>;

/// Sending half of the update queue. Unbounded: `enqueue` never blocks, so
/// the webhook handler can acknowledge immediately regardless of worker
/// backlog. Kept unbounded deliberately (see DESIGN.md) — a burst of inbound
/// updates is absorbed in memory until the worker catches up.
#[derive(Clone)]
pub struct UpdateQueue {
    tx: mpsc::UnboundedSender<InboundUpdate>,
}

impl UpdateQueue {
    /// Creates the queue, returning the sender and the worker's receiver.
    pub fn new() -> (Self, UpdateReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Enqueues one update. Non-blocking; if the worker has shut down the
    /// update is dropped with a warning (the webhook ack is unaffected).
    pub fn enqueue(&self, update: InboundUpdate) {
        if let Err(e) = self.tx.send(update) {
            warn!(update_id = e.0.id, "Dispatch worker gone, dropping update");
        }
    }
}
