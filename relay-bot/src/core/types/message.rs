//! Inbound message as seen by handlers.

use chrono::{DateTime, Utc};

use super::{chat::Chat, user::User};

/// One inbound message. Consumed once by the handler chain and discarded after the reply attempt.
#[derive(Debug, Clone)]
pub struct Message {
    /// Transport message id; used to thread the reply.
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; `None` for stickers, photos without text, service messages, etc.
    pub text: Option<String>,
    pub created_at: DateTime<Utc>,
}
