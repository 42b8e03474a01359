//! Integration tests for [`dispatch::HandlerChain`] and [`dispatch::DispatchWorker`].
//!
//! Covers: handler routing order, FIFO dispatch order, error isolation (a
//! failing update does not block the next one), no-body updates being dropped,
//! and the per-update handler timeout.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dispatch::{DispatchWorker, HandlerChain, UpdateQueue};
use promptbot_core::{
    Bot, Chat, Handler, HandlerError, HandlerResponse, InboundUpdate, Message, ReplyMessage,
    Result, User,
};
use tokio::sync::mpsc;
use tokio::time::sleep;

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        created_at: Utc::now(),
    }
}

fn create_update(id: i64, content: &str) -> InboundUpdate {
    InboundUpdate {
        id,
        message: Some(create_test_message(content)),
    }
}

/// Mock Bot that forwards every sent reply text to an mpsc channel.
struct MockBot {
    sender: mpsc::UnboundedSender<String>,
}

impl MockBot {
    fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sender: tx }), rx)
    }
}

#[async_trait::async_trait]
impl Bot for MockBot {
    async fn send_message(&self, _chat: &Chat, text: &str) -> Result<()> {
        let _ = self.sender.send(text.to_string());
        Ok(())
    }

    async fn send_reply(&self, chat: &Chat, reply: &ReplyMessage) -> Result<()> {
        self.send_message(chat, &reply.text).await
    }
}

/// Handler that echoes the message content as a reply.
struct EchoHandler;

#[async_trait::async_trait]
impl Handler for EchoHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        Ok(HandlerResponse::Reply(ReplyMessage::text(
            message.content.clone(),
        )))
    }
}

/// Handler that fails on a specific content and echoes everything else.
struct FailOnHandler {
    poison: String,
}

#[async_trait::async_trait]
impl Handler for FailOnHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content == self.poison {
            return Err(HandlerError::InvalidCommand(message.content.clone()).into());
        }
        Ok(HandlerResponse::Reply(ReplyMessage::text(
            message.content.clone(),
        )))
    }
}

/// **Test: Handlers run in chain order; the first Reply ends the chain.**
///
/// **Setup:** A counting handler that returns Continue, then an EchoHandler, then a counting handler.
/// **Action:** `chain.handle(&message)`.
/// **Expected:** First handler ran, reply comes from EchoHandler, third handler never ran.
#[tokio::test]
async fn test_chain_first_reply_wins() {
    struct CountingContinueHandler {
        count: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl Handler for CountingContinueHandler {
        async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(HandlerResponse::Continue)
        }
    }

    let before = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CountingContinueHandler {
            count: before.clone(),
        }))
        .add_handler(Arc::new(EchoHandler))
        .add_handler(Arc::new(CountingContinueHandler {
            count: after.clone(),
        }));

    let message = create_test_message("hello");
    let result = chain.handle(&message).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply(ReplyMessage::text("hello")));
    assert_eq!(before.load(Ordering::SeqCst), 1);
    assert_eq!(after.load(Ordering::SeqCst), 0);
}

/// **Test: A chain where no handler matches returns Continue.**
#[tokio::test]
async fn test_chain_without_match_returns_continue() {
    let chain = HandlerChain::new();
    let message = create_test_message("anything");
    let result = chain.handle(&message).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}

/// **Test: Updates enqueued before the worker drains are dispatched in FIFO order.**
///
/// **Setup:** Queue with 5 updates enqueued up front, EchoHandler chain, MockBot.
/// **Action:** Spawn the worker, collect 5 replies.
/// **Expected:** Replies arrive in submission order.
#[tokio::test]
async fn test_worker_preserves_fifo_order() {
    let (queue, rx) = UpdateQueue::new();
    let (bot, mut replies) = MockBot::new();

    for i in 0..5 {
        queue.enqueue(create_update(i, &format!("msg_{}", i)));
    }

    let chain = HandlerChain::new().add_handler(Arc::new(EchoHandler));
    tokio::spawn(DispatchWorker::new(chain, bot, rx).run());

    for i in 0..5 {
        let reply = replies.recv().await.expect("reply expected");
        assert_eq!(reply, format!("msg_{}", i));
    }
}

/// **Test: A handler error for update K does not prevent update K+1 from being dispatched.**
///
/// **Setup:** FailOnHandler poisoned on "boom"; updates "first", "boom", "third".
/// **Action:** Spawn the worker, collect replies.
/// **Expected:** Replies are "first" then "third"; the failing update produces none.
#[tokio::test]
async fn test_worker_continues_after_handler_error() {
    let (queue, rx) = UpdateQueue::new();
    let (bot, mut replies) = MockBot::new();

    queue.enqueue(create_update(1, "first"));
    queue.enqueue(create_update(2, "boom"));
    queue.enqueue(create_update(3, "third"));

    let chain = HandlerChain::new().add_handler(Arc::new(FailOnHandler {
        poison: "boom".to_string(),
    }));
    tokio::spawn(DispatchWorker::new(chain, bot, rx).run());

    assert_eq!(replies.recv().await.unwrap(), "first");
    assert_eq!(replies.recv().await.unwrap(), "third");
}

/// **Test: An update without a message body is dropped — no handler runs, no reply is sent.**
///
/// **Setup:** One no-body update followed by a normal one.
/// **Action:** Spawn the worker, collect replies.
/// **Expected:** Only the normal update's reply arrives.
#[tokio::test]
async fn test_worker_drops_update_without_message() {
    let (queue, rx) = UpdateQueue::new();
    let (bot, mut replies) = MockBot::new();

    queue.enqueue(InboundUpdate {
        id: 1,
        message: None,
    });
    queue.enqueue(create_update(2, "after_empty"));

    let chain = HandlerChain::new().add_handler(Arc::new(EchoHandler));
    tokio::spawn(DispatchWorker::new(chain, bot, rx).run());

    assert_eq!(replies.recv().await.unwrap(), "after_empty");
    assert!(replies.try_recv().is_err());
}

/// **Test: A hung handler is cut off by the per-update timeout and the next update is dispatched.**
///
/// **Setup:** Handler that sleeps 10s on "hang", worker timeout 50ms; updates "hang", "next".
/// **Action:** Spawn the worker, wait for the reply.
/// **Expected:** "next" is answered; the hung update produces no reply.
#[tokio::test]
async fn test_worker_times_out_hung_handler() {
    struct HangOnHandler;

    #[async_trait::async_trait]
    impl Handler for HangOnHandler {
        async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
            if message.content == "hang" {
                sleep(Duration::from_secs(10)).await;
            }
            Ok(HandlerResponse::Reply(ReplyMessage::text(
                message.content.clone(),
            )))
        }
    }

    let (queue, rx) = UpdateQueue::new();
    let (bot, mut replies) = MockBot::new();

    queue.enqueue(create_update(1, "hang"));
    queue.enqueue(create_update(2, "next"));

    let chain = HandlerChain::new().add_handler(Arc::new(HangOnHandler));
    tokio::spawn(
        DispatchWorker::new(chain, bot, rx)
            .with_handler_timeout(Duration::from_millis(50))
            .run(),
    );

    assert_eq!(replies.recv().await.unwrap(), "next");
}

/// **Test: Enqueue after the worker is gone does not panic (update is dropped with a warning).**
#[tokio::test]
async fn test_enqueue_after_worker_shutdown() {
    let (queue, rx) = UpdateQueue::new();
    drop(rx);
    queue.enqueue(create_update(1, "late"));
}
