use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{DepartmentMatch, DoctorDashboard, SetAvailabilityRequest, SlotCalendarEntry};
use crate::services::availability::AvailabilityService;

#[derive(Debug, Deserialize)]
pub struct BookableQuery {
    /// Client-local hour (0-23). Falls back to the server clock when absent.
    pub hour: Option<u32>,
}

#[axum::debug_handler]
pub async fn get_bookable_doctors(
    State(state): State<Arc<AppConfig>>,
    Path(department): Path<String>,
    Query(query): Query<BookableQuery>,
) -> Result<Json<DepartmentMatch>, AppError> {
    let service = AvailabilityService::new(&state);
    let matched = service.doctors_bookable_now(&department, query.hour).await?;

    Ok(Json(matched))
}

#[axum::debug_handler]
pub async fn get_doctor_dashboard(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<DoctorDashboard>, AppError> {
    let service = AvailabilityService::new(&state);
    let dashboard = service.weekly_dashboard(&doctor_id).await?;

    Ok(Json(dashboard))
}

#[axum::debug_handler]
pub async fn set_availability(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<String>,
    Json(request): Json<SetAvailabilityRequest>,
) -> Result<Json<SlotCalendarEntry>, AppError> {
    let service = AvailabilityService::new(&state);
    let entry = service.set_availability(&doctor_id, request).await?;

    Ok(Json(entry))
}
