use std::sync::Arc;

use axum::{extract::State, Json};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{DoctorAccount, DoctorLoginRequest};
use crate::services::credentials::CredentialService;

#[axum::debug_handler]
pub async fn doctor_login(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<DoctorLoginRequest>,
) -> Result<Json<DoctorAccount>, AppError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "email and password are required".to_string(),
        ));
    }

    let service = CredentialService::new(&state);
    let account = service
        .verify_login(request.email.trim(), &request.password)
        .await?;

    Ok(Json(account))
}
