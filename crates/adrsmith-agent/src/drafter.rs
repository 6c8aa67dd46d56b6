// ABOUTME: The AdrDrafter strategy trait and its two implementations.
// ABOUTME: TemplateDrafter renders offline; LlmDrafter delegates the built prompt to a ChatRuntime.

use async_trait::async_trait;
use chrono::Utc;

use adrsmith_core::{AdrId, AdrInputs};
use adrsmith_core::prompt::build_prompt;
use adrsmith_core::template::render_template;

use crate::runtime::{AgentError, ChatRuntime};

/// A drafting strategy: turns one input set into a complete Markdown ADR
/// body. The caller selects the strategy explicitly; nothing here inspects
/// ambient mode state.
#[async_trait]
pub trait AdrDrafter: Send + Sync {
    /// Produce the ADR body for the given inputs and identifier.
    async fn draft(&self, inputs: &AdrInputs, adr_id: &AdrId) -> Result<String, AgentError>;

    /// Strategy name for logging and display ("mock" or "real").
    fn mode_name(&self) -> &str;
}

/// Deterministic offline strategy: fills the fixed Markdown template.
pub struct TemplateDrafter;

#[async_trait]
impl AdrDrafter for TemplateDrafter {
    async fn draft(&self, inputs: &AdrInputs, adr_id: &AdrId) -> Result<String, AgentError> {
        Ok(render_template(inputs, adr_id, Utc::now().date_naive()))
    }

    fn mode_name(&self) -> &str {
        "mock"
    }
}

/// Delegating strategy: builds the instruction prompt and hands it to a
/// chat-completion provider. The response text becomes the ADR body
/// verbatim; there is no parsing, no validation, and no retry.
pub struct LlmDrafter {
    runtime: Box<dyn ChatRuntime>,
}

impl LlmDrafter {
    /// Create a drafter over the given provider runtime.
    pub fn new(runtime: Box<dyn ChatRuntime>) -> Self {
        Self { runtime }
    }
}

#[async_trait]
impl AdrDrafter for LlmDrafter {
    async fn draft(&self, inputs: &AdrInputs, adr_id: &AdrId) -> Result<String, AgentError> {
        let prompt = build_prompt(inputs);
        tracing::debug!(
            "drafting ADR {} via {} ({})",
            adr_id,
            self.runtime.provider_name(),
            self.runtime.model_name()
        );
        self.runtime.complete(&prompt).await
    }

    fn mode_name(&self) -> &str {
        "real"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubChatRuntime;
    use adrsmith_core::{
        ApplicationContext, DatabaseContext, InfrastructureContext, TradeoffDimension,
    };
    use chrono::NaiveDate;

    fn make_inputs() -> AdrInputs {
        AdrInputs {
            availability: "99.9%".to_string(),
            latency_target: "P95 <= 250 ms".to_string(),
            cost_cap: "$9k/month".to_string(),
            review_date: NaiveDate::from_ymd_opt(2027, 8, 7).unwrap(),
            application_context: ApplicationContext::LegacyMonolith,
            database_context: DatabaseContext::OracleSqlServerOnPrem,
            infrastructure_context: InfrastructureContext::OnPremDataCenter,
            tradeoff_dimensions: vec![TradeoffDimension::Cost, TradeoffDimension::Reliability],
        }
    }

    #[tokio::test]
    async fn template_drafter_renders_the_fixed_document() {
        let drafter = TemplateDrafter;
        let adr_id = AdrId::new("20260807-120000").unwrap();

        let body = drafter.draft(&make_inputs(), &adr_id).await.unwrap();

        assert!(body.contains("# ADR-20260807-120000"));
        assert!(body.contains("## Trade-off Matrix"));
        assert!(body.contains("P95 <= 250 ms"));
        assert_eq!(drafter.mode_name(), "mock");
    }

    #[tokio::test]
    async fn llm_drafter_returns_provider_text_verbatim() {
        let drafter = LlmDrafter::new(Box::new(StubChatRuntime::new(
            "# ADR: whatever the model said\n\nTrust it.",
        )));
        let adr_id = AdrId::new("20260807-120000").unwrap();

        let body = drafter.draft(&make_inputs(), &adr_id).await.unwrap();

        assert_eq!(body, "# ADR: whatever the model said\n\nTrust it.");
        assert_eq!(drafter.mode_name(), "real");
    }

    #[tokio::test]
    async fn llm_drafter_sends_the_built_prompt() {
        let stub = StubChatRuntime::new("ok");
        let prompts = stub.prompts();
        let drafter = LlmDrafter::new(Box::new(stub));
        let adr_id = AdrId::new("20260807-120000").unwrap();

        drafter.draft(&make_inputs(), &adr_id).await.unwrap();

        let seen = prompts.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("You are the Architecture Copilot."));
        assert!(seen[0].contains("trade-off matrix over: Cost, Reliability"));
    }

    #[tokio::test]
    async fn llm_drafter_propagates_provider_failure() {
        let drafter = LlmDrafter::new(Box::new(StubChatRuntime::failing(
            "Server error: 503 Service Unavailable",
        )));
        let adr_id = AdrId::new("20260807-120000").unwrap();

        let err = drafter.draft(&make_inputs(), &adr_id).await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }
}
