//! Shared test doubles: a recording [`relay_bot::Bot`] and a scripted [`llm_client::LlmClient`].

#![allow(dead_code)]

pub mod mock_bot;
pub mod mock_llm;
pub mod telegram_api;

use chrono::Utc;
use relay_bot::{Chat, Message, User};

pub const TEST_CHAT_ID: i64 = 456;

pub fn create_test_message(id: &str, text: Option<&str>) -> Message {
    Message {
        id: id.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: TEST_CHAT_ID,
            chat_type: "private".to_string(),
        },
        text: text.map(str::to_string),
        created_at: Utc::now(),
    }
}
