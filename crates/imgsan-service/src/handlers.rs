//! HTTP handlers

use crate::state::AppState;
use axum::{extract::State, Json};
use imgsan_core::models::{HandlerResponse, ObjectCreatedEvent};
use std::sync::Arc;

/// Receive one batch of object-created notifications and return the batch
/// summary. Always 200; per-record failures live inside `body.results`.
pub async fn handle_event(
    State(state): State<Arc<AppState>>,
    Json(event): Json<ObjectCreatedEvent>,
) -> Json<HandlerResponse> {
    tracing::info!(records = event.records.len(), "Received event batch");
    Json(state.dispatcher.handle(event).await)
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
