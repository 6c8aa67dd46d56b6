// ABOUTME: Provider module aggregating chat-completion adapters.
// ABOUTME: Each sub-module implements ChatRuntime for a specific hosted API.

pub mod openai;
