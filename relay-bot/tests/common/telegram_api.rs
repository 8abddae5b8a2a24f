//! Canned Bot API responses for tests running teloxide against a mockito server.
//!
//! teloxide posts to `/bot<token>/<Method>` with PascalCase method names (`SendMessage`, `GetMe`).

pub const TEST_BOT_TOKEN: &str = "test_bot_token_12345";
pub const TEST_BOT_USERNAME: &str = "relay_test_bot";

pub const SEND_MESSAGE_OK: &str = r#"{
    "ok": true,
    "result": {
        "message_id": 99,
        "date": 1706529600,
        "chat": {"id": 456, "type": "private", "first_name": "Test"},
        "from": {"id": 123456789, "is_bot": true, "first_name": "RelayBot", "username": "relay_test_bot"},
        "text": "ok"
    }
}"#;

pub const GET_ME_OK: &str = r#"{
    "ok": true,
    "result": {
        "id": 123456789,
        "is_bot": true,
        "first_name": "RelayBot",
        "username": "relay_test_bot",
        "can_join_groups": true,
        "can_read_all_group_messages": false,
        "supports_inline_queries": false,
        "has_main_web_app": false
    }
}"#;

pub const GET_WEBHOOK_INFO_OK: &str =
    r#"{"ok": true, "result": {"url": "", "has_custom_certificate": false, "pending_update_count": 0}}"#;

pub const NO_UPDATES: &str = r#"{"ok": true, "result": []}"#;

/// Path of a Bot API method for [`TEST_BOT_TOKEN`].
pub fn method_path(method: &str) -> String {
    format!("/bot{}/{}", TEST_BOT_TOKEN, method)
}

/// teloxide bot pointed at the mock server.
pub fn test_bot(server: &mockito::ServerGuard) -> teloxide::Bot {
    let url = reqwest::Url::parse(&server.url()).unwrap();
    teloxide::Bot::new(TEST_BOT_TOKEN).set_api_url(url)
}

/// A `getUpdates` result carrying one private text message from user 123 in chat 456.
pub fn text_message_update(update_id: i64, message_id: i32, text: &str) -> String {
    serde_json::json!({
        "ok": true,
        "result": [{
            "update_id": update_id,
            "message": {
                "message_id": message_id,
                "date": 1706529600,
                "chat": {"id": 456, "type": "private", "first_name": "Test"},
                "from": {"id": 123, "is_bot": false, "first_name": "Test", "username": "test_user"},
                "text": text
            }
        }]
    })
    .to_string()
}
