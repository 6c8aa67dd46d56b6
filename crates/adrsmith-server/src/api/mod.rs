// ABOUTME: JSON API handlers for the adrsmith registry.
// ABOUTME: Exposes the stored ADR listing for programmatic consumers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use adrsmith_core::AdrId;

use crate::app_state::SharedState;

/// One stored ADR as returned by the list endpoint. Content is the full
/// Markdown text read back from disk.
#[derive(Debug, Serialize)]
pub struct AdrSummary {
    pub adr_id: AdrId,
    pub file_name: String,
    pub content: String,
}

/// GET /api/adrs - List all stored ADRs, newest first, with full content.
pub async fn list_adrs(State(state): State<SharedState>) -> impl IntoResponse {
    match state.store.list() {
        Ok(adrs) => {
            let summaries: Vec<AdrSummary> = adrs
                .into_iter()
                .map(|a| AdrSummary {
                    adr_id: a.adr_id,
                    file_name: a.file_name,
                    content: a.content,
                })
                .collect();
            Json(summaries).into_response()
        }
        Err(e) => {
            tracing::error!("failed to list ADRs: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "failed to list ADRs" })),
            )
                .into_response()
        }
    }
}
