use std::sync::Arc;

use axum::{extract::State, Json};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{Profile, UpsertProfileRequest};
use crate::services::profile::ProfileService;

#[axum::debug_handler]
pub async fn upsert_profile(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<UpsertProfileRequest>,
) -> Result<Json<Profile>, AppError> {
    let service = ProfileService::new(&state);

    let profile = service
        .upsert_profile(request)
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    Ok(Json(profile))
}
