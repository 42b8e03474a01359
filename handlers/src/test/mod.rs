//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests interact with handlers via the public API.


use chrono::Utc;
use promptbot_core::{Chat, Message, User};

pub(crate) fn sample_message(content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: 100,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}
