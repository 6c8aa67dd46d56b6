// ABOUTME: Route definitions for the adrsmith HTTP server.
// ABOUTME: Assembles web UI, download, and API routes into a single Axum Router with shared state.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;
use crate::web;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(web::index))
        .route("/web/adrs", get(web::adr_list).post(web::generate))
        .route("/web/provider-status", get(web::provider_status))
        .route("/adrs/{file}", get(web::download))
        .route("/api/adrs", get(api::list_adrs))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
