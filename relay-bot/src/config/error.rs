//! Configuration errors. [`ConfigError::MissingRequired`] renders a multi-line, actionable message.

use thiserror::Error;

/// A required setting that is absent or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSetting {
    pub name: &'static str,
    pub purpose: &'static str,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Every missing required setting, in declaration order.
    #[error("{}", missing_settings_help(.0))]
    MissingRequired(Vec<MissingSetting>),

    #[error("{name} is set but not a valid URL: {value}")]
    InvalidUrl { name: String, value: String },
}

impl ConfigError {
    /// Names of the missing settings (empty for other variants).
    pub fn missing_names(&self) -> Vec<&'static str> {
        match self {
            ConfigError::MissingRequired(missing) => missing.iter().map(|m| m.name).collect(),
            _ => Vec::new(),
        }
    }
}

fn missing_settings_help(missing: &[MissingSetting]) -> String {
    let mut lines = vec!["Missing required environment variables:".to_string()];
    lines.extend(
        missing
            .iter()
            .map(|m| format!("  • {}: {}", m.name, m.purpose)),
    );
    lines.extend(
        [
            "",
            "Set them for the current shell session:",
            "  • Windows (cmd):        set NAME=VALUE",
            "  • Windows (PowerShell): $Env:NAME=\"VALUE\"",
            "  • macOS/Linux (bash):   export NAME=VALUE",
            "or put them in a .env file in the working directory.",
            "",
            "Then run again: relay-bot run",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    lines.join("\n")
}
