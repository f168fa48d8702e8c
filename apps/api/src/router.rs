use std::sync::Arc;

use axum::{routing::get, Router};

use auth_cell::router::auth_routes;
use profile_cell::router::profile_routes;
use scheduling_cell::router::scheduling_routes;
use shared_config::AppConfig;
use triage_cell::router::triage_routes;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic Triage API is running!" }))
        .nest("/triage", triage_routes(state.clone()))
        .nest("/profiles", profile_routes(state.clone()))
        .nest("/auth", auth_routes(state.clone()))
        .merge(scheduling_routes(state))
}
