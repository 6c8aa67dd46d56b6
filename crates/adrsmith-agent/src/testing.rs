// ABOUTME: Test utilities for adrsmith-agent, including a stub chat runtime.
// ABOUTME: Used in tests to simulate provider responses without real API calls.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::runtime::{AgentError, ChatRuntime};

/// A stub chat runtime that returns a pre-configured response and records
/// every prompt it receives.
///
/// Useful in tests to drive the real-mode path to completion without making
/// API calls, and to assert on the exact prompt that was sent.
pub struct StubChatRuntime {
    response: Result<String, String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubChatRuntime {
    /// Create a stub that always returns the given text.
    pub fn new(response_text: &str) -> Self {
        Self {
            response: Ok(response_text.to_owned()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a stub that always fails with a provider error carrying the
    /// given message.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_owned()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the recorded prompts. Clone before moving the stub into a
    /// drafter so assertions can inspect what was sent.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl ChatRuntime for StubChatRuntime {
    async fn complete(&self, prompt: &str) -> Result<String, AgentError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(AgentError::ProviderError(message.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "stub"
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}
