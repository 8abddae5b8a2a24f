//! Model selection defaults.

/// Model used when `GOOGLE_MODEL` is absent or blank.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

pub use gemini_client::DEFAULT_BASE_URL;

/// Returns the trimmed model name, or [`DEFAULT_MODEL`] when `model` is `None` or blank.
pub fn resolve_model(model: Option<&str>) -> String {
    model
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(DEFAULT_MODEL)
        .to_string()
}
