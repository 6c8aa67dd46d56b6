// ABOUTME: OpenAI API adapter implementing the ChatRuntime trait.
// ABOUTME: Sends the drafting prompt to the Chat Completions API and returns the first choice's text.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::runtime::{AgentError, ChatRuntime};

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const TEMPERATURE: f64 = 0.4;
const MAX_TOKENS: u32 = 2048;

/// OpenAI runtime adapter. Posts a single user message to the Chat
/// Completions API and returns the response content verbatim.
pub struct OpenAIRuntime {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAIRuntime {
    /// Create a new OpenAIRuntime reading configuration from environment variables.
    /// Required: `OPENAI_API_KEY`
    /// Optional: `OPENAI_BASE_URL` (defaults to https://api.openai.com)
    /// Optional: `OPENAI_MODEL` (defaults to gpt-4.1-mini)
    pub fn from_env() -> Result<Self, AgentError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| AgentError::MissingCredential("OPENAI_API_KEY not set".to_string()))?;

        Ok(Self::with_api_key(api_key))
    }

    /// Create a new OpenAIRuntime from an already-resolved credential,
    /// reading base URL and model from the environment with defaults.
    pub fn with_api_key(api_key: String) -> Self {
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self::new(api_key, base_url, model)
    }

    /// Create a new OpenAIRuntime with explicit configuration.
    pub fn new(api_key: String, base_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
            model,
        }
    }

    /// Build the JSON request body for the Chat Completions API: one
    /// user-role message, bounded temperature, bounded output budget.
    pub fn build_request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": prompt
            }],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS
        })
    }

    /// Extract the first choice's message content from a Chat Completions
    /// response. The text is returned as-is; its structure is not inspected.
    pub fn parse_response(response_body: &Value) -> Result<String, AgentError> {
        let choices = response_body
            .get("choices")
            .and_then(|c| c.as_array())
            .ok_or_else(|| {
                AgentError::InvalidResponse("missing choices array in response".to_string())
            })?;

        let choice = choices
            .first()
            .ok_or_else(|| AgentError::InvalidResponse("empty choices array".to_string()))?;

        let content = choice
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                AgentError::InvalidResponse("missing message content in choice".to_string())
            })?;

        if content.is_empty() {
            return Err(AgentError::InvalidResponse(
                "empty message content in choice".to_string(),
            ));
        }

        Ok(content.to_string())
    }
}

#[async_trait]
impl ChatRuntime for OpenAIRuntime {
    async fn complete(&self, prompt: &str) -> Result<String, AgentError> {
        let body = self.build_request_body(prompt);
        let url = format!("{}/v1/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::ProviderError(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AgentError::RateLimited);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AgentError::ProviderError(
                "Unauthorized: check OPENAI_API_KEY".to_string(),
            ));
        }

        if status.is_server_error() {
            return Err(AgentError::ProviderError(format!(
                "Server error: {}",
                status
            )));
        }

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AgentError::ProviderError(format!(
                "API error {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| AgentError::InvalidResponse(format!("failed to parse JSON: {}", e)))?;

        Self::parse_response(&response_body)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
