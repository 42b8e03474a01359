//! Single-consumer dispatch loop: dequeues updates in FIFO arrival order and
//! routes each through the handler chain, sending any reply via the bot.

use std::sync::Arc;
use std::time::Duration;

use promptbot_core::{Bot, HandlerResponse, InboundUpdate};
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::chain::HandlerChain;
use crate::queue::UpdateReceiver;

const DEFAULT_HANDLER_TIMEOUT: Duration = Duration::from_secs(30);

/// Pause after a failed update before picking up the next one.
const FAILURE_PAUSE: Duration = Duration::from_millis(100);

/// Drains the update queue one item at a time. Handler execution for update N
/// completes (success, error, or timeout) before update N+1 begins; a failing
/// update is logged and skipped, never retried.
pub struct DispatchWorker {
    chain: HandlerChain,
    bot: Arc<dyn Bot>,
    rx: UpdateReceiver,
    handler_timeout: Duration,
}

impl DispatchWorker {
    /// Creates a worker with the default per-update handler timeout (30s).
    pub fn new(chain: HandlerChain, bot: Arc<dyn Bot>, rx: UpdateReceiver) -> Self {
        Self {
            chain,
            bot,
            rx,
            handler_timeout: DEFAULT_HANDLER_TIMEOUT,
        }
    }

    /// Overrides the per-update handler timeout.
    pub fn with_handler_timeout(mut self, handler_timeout: Duration) -> Self {
        self.handler_timeout = handler_timeout;
        self
    }

    /// Runs until the queue's sending half is dropped.
    pub async fn run(mut self) {
        info!("Dispatch worker started");
        while let Some(update) = self.rx.recv().await {
            if let Err(e) = self.dispatch(&update).await {
                error!(
                    update_id = update.id,
                    error = ?e,
                    "Update dispatch failed, continuing with next update"
                );
                tokio::time::sleep(FAILURE_PAUSE).await;
            }
        }
        info!("Update queue closed, dispatch worker stopping");
    }

    async fn dispatch(&self, update: &InboundUpdate) -> anyhow::Result<()> {
        let Some(message) = &update.message else {
            info!(update_id = update.id, "Update has no message body, dropped");
            return Ok(());
        };

        info!(
            update_id = update.id,
            user_id = message.user.id,
            message_content = %message.content,
            "step: dispatching update"
        );

        let response = timeout(self.handler_timeout, self.chain.handle(message))
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "handler chain timed out after {:?}",
                    self.handler_timeout
                )
            })??;

        match response {
            HandlerResponse::Reply(reply) => {
                self.bot.send_reply(&message.chat, &reply).await?;
                info!(update_id = update.id, "step: reply sent");
            }
            HandlerResponse::Stop => {
                info!(update_id = update.id, "step: handled without reply");
            }
            HandlerResponse::Continue => {
                warn!(
                    update_id = update.id,
                    "No handler claimed the update, no reply sent"
                );
            }
        }

        Ok(())
    }
}
