//! Webhook receiver and server wiring.
//!
//! `POST /webhook` decodes the body into a Telegram update and enqueues it for
//! the dispatch worker. The response is always HTTP 200 with a fixed
//! `{"status":"ok"}` body, whether or not decoding succeeded: Telegram only
//! needs a fast acknowledgment to avoid retransmission, so internal failures
//! are logged, never surfaced to the caller.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use dispatch::{DispatchWorker, HandlerChain, UpdateQueue};
use promptbot_core::ToCoreUpdate;
use serde_json::{json, Value};
use teloxide::types::Update;
use tracing::{info, warn};

use crate::adapters::TelegramUpdateWrapper;
use crate::bot_adapter::TelegramBotAdapter;
use crate::config::BotConfig;

pub const WEBHOOK_PATH: &str = "/webhook";

#[derive(Clone)]
struct AppState {
    queue: UpdateQueue,
}

/// Builds the webhook router over the given queue. Separate from
/// [`run_webhook`] so tests can drive the router directly.
pub fn webhook_router(queue: UpdateQueue) -> Router {
    Router::new()
        .route(WEBHOOK_PATH, post(receive_update))
        .with_state(AppState { queue })
}

async fn receive_update(
    State(state): State<AppState>,
    payload: Result<Json<Update>, JsonRejection>,
) -> Json<Value> {
    match payload {
        Ok(Json(update)) => {
            let inbound = TelegramUpdateWrapper(&update).to_core();
            info!(
                update_id = inbound.id,
                has_message = inbound.message.is_some(),
                "Received update"
            );
            state.queue.enqueue(inbound);
        }
        Err(rejection) => {
            warn!(error = %rejection, "Malformed webhook body, update discarded");
        }
    }

    Json(json!({"status": "ok"}))
}

/// Runs the full pipeline: builds the teloxide bot, spawns the dispatch
/// worker, and serves the webhook until the process is stopped.
pub async fn run_webhook(config: BotConfig, chain: HandlerChain) -> anyhow::Result<()> {
    let mut bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(api_url) = &config.telegram_api_url {
        bot = bot.set_api_url(reqwest::Url::parse(api_url)?);
    }
    let adapter = Arc::new(TelegramBotAdapter::new(bot));

    let (queue, rx) = UpdateQueue::new();
    let worker =
        DispatchWorker::new(chain, adapter, rx).with_handler_timeout(config.handler_timeout);
    tokio::spawn(worker.run());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, path = WEBHOOK_PATH, "Webhook server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, webhook_router(queue)).await?;

    Ok(())
}
