//! Mock implementation of [`llm_client::LlmClient`] that records prompts and replays scripted results.

use async_trait::async_trait;
use llm_client::LlmClient;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Returns scripted results in order; once exhausted, echoes `"answer: <text>"`.
#[derive(Default)]
pub struct MockLlm {
    calls: Mutex<Vec<String>>,
    script: Mutex<VecDeque<anyhow::Result<String>>>,
}

impl MockLlm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: Vec<anyhow::Result<String>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            script: Mutex::new(script.into()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn respond(&self, text: &str) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push(text.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(format!("answer: {}", text)),
        }
    }
}
