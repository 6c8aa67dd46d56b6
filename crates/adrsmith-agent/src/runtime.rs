// ABOUTME: Defines the ChatRuntime trait that LLM provider adapters implement.
// ABOUTME: Also defines AgentError, the failure taxonomy for drafting operations.

use async_trait::async_trait;

/// Errors that can occur while drafting through an external provider.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Rate limited")]
    RateLimited,
}

/// Trait implemented by chat-completion provider adapters. An adapter takes
/// one fully constructed prompt and returns the model's text verbatim; it
/// performs no parsing or validation of the returned document.
#[async_trait]
pub trait ChatRuntime: Send + Sync {
    /// Send the prompt as a single user message and return the first
    /// response's text content.
    async fn complete(&self, prompt: &str) -> Result<String, AgentError>;

    /// Provider name for logging and display (e.g. "openai").
    fn provider_name(&self) -> &str;

    /// Model identifier being used (e.g. "gpt-4.1-mini").
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_error_display() {
        let errors = vec![
            AgentError::MissingCredential("OPENAI_API_KEY not set".to_string()),
            AgentError::ProviderError("connection timeout".to_string()),
            AgentError::InvalidResponse("missing choices array".to_string()),
            AgentError::RateLimited,
        ];

        for err in &errors {
            assert!(!err.to_string().is_empty());
        }

        assert!(
            AgentError::MissingCredential("no key".to_string())
                .to_string()
                .contains("no key")
        );
    }
}
