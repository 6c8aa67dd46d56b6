// ABOUTME: Shared application state for the adrsmith HTTP server.
// ABOUTME: Bundles the ADR store, configuration, and provider status for all handlers.

use std::sync::Arc;

use adrsmith_store::AdrStore;

use crate::config::AdrConfig;
use crate::providers::ProviderStatus;

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub store: AdrStore,
    pub config: AdrConfig,
    pub provider_status: ProviderStatus,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create a new AppState over an already-opened store.
    pub fn new(store: AdrStore, config: AdrConfig, provider_status: ProviderStatus) -> Self {
        Self {
            store,
            config,
            provider_status,
        }
    }
}
