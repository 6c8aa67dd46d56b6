// ABOUTME: HTTP server for adrsmith, providing the generate/registry web UI and JSON API.
// ABOUTME: Uses Axum with shared store state and Askama templates for browser views.

pub mod api;
pub mod app_state;
pub mod config;
pub mod providers;
pub mod routes;
pub mod web;

pub use app_state::{AppState, SharedState};
pub use config::{AdrConfig, ConfigError};
pub use providers::ProviderStatus;
pub use routes::create_router;
