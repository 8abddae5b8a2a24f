//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and a Gemini implementation. Transport-agnostic; the relay
//! bot only talks to `dyn LlmClient`, so tests can swap in a mock.

use anyhow::Result;
use async_trait::async_trait;

mod config;
mod gemini_llm;

pub use config::{resolve_model, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use gemini_llm::GeminiLlmClient;

/// LLM client interface: answer one free-form prompt.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model's answer for `text`.
    ///
    /// Unreadable or unexpected response shapes are turned into a best-effort string, never an
    /// error. `Err` means the call itself failed (network, HTTP status, invalid body).
    async fn respond(&self, text: &str) -> Result<String>;
}
