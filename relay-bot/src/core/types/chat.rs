//! Conversation identity.

/// Chat (private, group or channel) the message arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
