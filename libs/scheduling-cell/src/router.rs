use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn scheduling_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route(
            "/departments/{department}/bookable-doctors",
            get(handlers::get_bookable_doctors),
        )
        .route(
            "/doctors/{doctor_id}/dashboard",
            get(handlers::get_doctor_dashboard),
        )
        .route(
            "/doctors/{doctor_id}/availability",
            put(handlers::set_availability),
        )
        .with_state(state)
}
