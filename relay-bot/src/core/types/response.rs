//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries what was sent so `after()` can see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// The message is not for this handler; try next.
    Ignore,
    /// Stop the chain; `text` was sent to the chat.
    Reply(String),
}
