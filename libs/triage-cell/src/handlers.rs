use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{TriageChatRequest, TriageResult};
use crate::services::engine::TriageEngine;

/// One triage turn: replay the full history, get back either a follow-up
/// question or a concluded department + urgency.
#[axum::debug_handler]
pub async fn triage_chat(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<TriageChatRequest>,
) -> Result<Json<TriageResult>, AppError> {
    debug!("Triage chat request with {} turns", request.history.len());

    let engine = TriageEngine::new(&state);
    let result = engine
        .advance(&request.history, request.patient_context.as_ref())
        .await?;

    Ok(Json(result))
}
