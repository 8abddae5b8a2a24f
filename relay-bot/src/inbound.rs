//! Inbound message classification: greeting command, question for the model, or ignored.
//!
//! Used by both handlers so the greeting and relay paths can never disagree on what a message is.

use crate::core::Message;

/// Greeting command name, matched case-insensitively.
pub const START_COMMAND: &str = "start";

/// What the relay should do with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound<'a> {
    /// `/start` (optionally `/start@this_bot`): send the welcome text.
    Greeting,
    /// Trimmed question to forward to the model.
    Query(&'a str),
    /// No reply, no model call.
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    NoText,
    Blank,
    /// Any command other than the greeting; carries the command name as typed.
    UnsupportedCommand(String),
}

/// A `/command[@bot] args` prefix split into `(command, target_bot)`.
///
/// Returns `None` when `text` does not start with `/`.
pub fn parse_command(text: &str) -> Option<(&str, Option<&str>)> {
    let token = text.strip_prefix('/')?.split_whitespace().next().unwrap_or("");
    Some(match token.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (token, None),
    })
}

/// Classifies `message` in order: no text, blank text, command, question.
///
/// A `/start@other_bot` command addressed to a different bot is an unsupported command. When the
/// bot's own username is unknown any `@target` is accepted.
pub fn classify<'a>(message: &'a Message, bot_username: Option<&str>) -> Inbound<'a> {
    let Some(text) = message.text.as_deref() else {
        return Inbound::Ignored(IgnoreReason::NoText);
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Inbound::Ignored(IgnoreReason::Blank);
    }

    if let Some((command, target)) = parse_command(trimmed) {
        let addressed_to_us = match (target, bot_username) {
            (Some(target), Some(me)) => target.eq_ignore_ascii_case(me),
            _ => true,
        };
        if command.eq_ignore_ascii_case(START_COMMAND) && addressed_to_us {
            return Inbound::Greeting;
        }
        return Inbound::Ignored(IgnoreReason::UnsupportedCommand(command.to_string()));
    }

    Inbound::Query(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Chat, User};
    use chrono::Utc;

    fn message(text: Option<&str>) -> Message {
        Message {
            id: "1".to_string(),
            user: User::unknown(),
            chat: Chat {
                id: 7,
                chat_type: "private".to_string(),
            },
            text: text.map(str::to_string),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("/start"), Some(("start", None)));
        assert_eq!(parse_command("/start@my_bot hi"), Some(("start", Some("my_bot"))));
        assert_eq!(parse_command("/help me"), Some(("help", None)));
        assert_eq!(parse_command("/"), Some(("", None)));
        assert_eq!(parse_command("hello /start"), None);
    }

    #[test]
    fn test_no_text_and_blank_are_ignored() {
        assert_eq!(classify(&message(None), None), Inbound::Ignored(IgnoreReason::NoText));
        assert_eq!(classify(&message(Some("")), None), Inbound::Ignored(IgnoreReason::Blank));
        assert_eq!(
            classify(&message(Some(" \n\t ")), None),
            Inbound::Ignored(IgnoreReason::Blank)
        );
    }

    #[test]
    fn test_start_is_greeting_case_insensitive() {
        for text in ["/start", "/START", "/Start now", "/start@my_bot", "/start@MY_BOT"] {
            assert_eq!(classify(&message(Some(text)), Some("my_bot")), Inbound::Greeting, "{text}");
        }
    }

    #[test]
    fn test_start_for_other_bot_is_dropped() {
        assert_eq!(
            classify(&message(Some("/start@other_bot")), Some("my_bot")),
            Inbound::Ignored(IgnoreReason::UnsupportedCommand("start".to_string()))
        );
        assert_eq!(classify(&message(Some("/start@other_bot")), None), Inbound::Greeting);
    }

    #[test]
    fn test_other_commands_are_dropped() {
        assert_eq!(
            classify(&message(Some("/unknown")), None),
            Inbound::Ignored(IgnoreReason::UnsupportedCommand("unknown".to_string()))
        );
        assert_eq!(
            classify(&message(Some("/startnow")), None),
            Inbound::Ignored(IgnoreReason::UnsupportedCommand("startnow".to_string()))
        );
    }

    #[test]
    fn test_leading_whitespace_before_command_is_ignored() {
        assert_eq!(
            classify(&message(Some("  /unknown")), None),
            Inbound::Ignored(IgnoreReason::UnsupportedCommand("unknown".to_string()))
        );
        assert_eq!(classify(&message(Some("\n /start")), None), Inbound::Greeting);
    }

    #[test]
    fn test_question_is_trimmed() {
        assert_eq!(
            classify(&message(Some("  What is 2+2?  \n")), None),
            Inbound::Query("What is 2+2?")
        );
        assert_eq!(
            classify(&message(Some("what does /start do?")), None),
            Inbound::Query("what does /start do?")
        );
    }
}
