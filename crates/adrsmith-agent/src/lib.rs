// ABOUTME: Drafting layer for adrsmith: the AdrDrafter strategy trait and its two implementations.
// ABOUTME: Also hosts the ChatRuntime provider seam and the OpenAI-compatible adapter.

pub mod drafter;
pub mod providers;
pub mod runtime;
pub mod testing;

pub use drafter::{AdrDrafter, LlmDrafter, TemplateDrafter};
pub use providers::openai::OpenAIRuntime;
pub use runtime::{AgentError, ChatRuntime};
