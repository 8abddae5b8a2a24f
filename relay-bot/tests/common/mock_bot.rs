//! Mock implementation of [`relay_bot::Bot`] that records every outbound message.

use async_trait::async_trait;
use relay_bot::{Bot, Chat, Message, RelayError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// One recorded outbound message. `reply_to` is the threaded message id, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: i64,
    pub reply_to: Option<String>,
    pub text: String,
}

/// Records sends; the first `fail_sends` calls fail with a transport error.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    fail_sends: AtomicUsize,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next `n` send attempts fail (and are not recorded).
    pub fn failing_first(n: usize) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: AtomicUsize::new(n),
        }
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, chat_id: i64, reply_to: Option<String>, text: &str) -> Result<()> {
        let should_fail = self
            .fail_sends
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if should_fail {
            return Err(RelayError::Bot("mock send failure".to_string()));
        }
        self.sent.lock().unwrap().push(SentRecord {
            chat_id,
            reply_to,
            text: text.to_string(),
        });
        Ok(())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(chat.id, None, text)
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(message.chat.id, Some(message.id.clone()), text)
    }
}
