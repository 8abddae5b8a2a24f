//! Message handlers: greeting command and Gemini relay.

mod greeting_handler;
mod relay_handler;

pub use greeting_handler::{GreetingHandler, WELCOME_MESSAGE};
pub use relay_handler::{RelayHandler, APOLOGY_MESSAGE};
