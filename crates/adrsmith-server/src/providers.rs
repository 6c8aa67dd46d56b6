// ABOUTME: LLM provider status detection for the adrsmith UI.
// ABOUTME: Reads environment variables to determine whether real mode is configured.

use serde::Serialize;

/// Status of a single chat-completion provider.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderInfo {
    pub name: String,
    pub has_api_key: bool,
    pub model: String,
    pub base_url: Option<String>,
}

/// Overall provider status for the UI. Real mode is offered only when at
/// least one provider has a key detected at startup; the form can still
/// supply a key directly for a single interaction.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderStatus {
    pub providers: Vec<ProviderInfo>,
    pub any_available: bool,
}

impl ProviderStatus {
    /// Detect configured providers from environment variables.
    ///
    /// Checks for OPENAI_API_KEY / OPENAI_MODEL / OPENAI_BASE_URL.
    /// Never exposes actual API key values.
    pub fn detect() -> Self {
        let providers = vec![Self::check_provider(
            "openai",
            "OPENAI_API_KEY",
            "OPENAI_MODEL",
            "OPENAI_BASE_URL",
            "gpt-4.1-mini",
        )];

        let any_available = providers.iter().any(|p| p.has_api_key);

        Self {
            providers,
            any_available,
        }
    }

    fn check_provider(
        name: &str,
        key_var: &str,
        model_var: &str,
        base_url_var: &str,
        default_model: &str,
    ) -> ProviderInfo {
        let has_api_key = std::env::var(key_var)
            .ok()
            .filter(|k| !k.is_empty())
            .is_some();
        let model = std::env::var(model_var)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default_model.to_string());
        let base_url = std::env::var(base_url_var)
            .ok()
            .filter(|u| !u.is_empty());

        ProviderInfo {
            name: name.to_string(),
            has_api_key,
            model,
            base_url,
        }
    }
}
