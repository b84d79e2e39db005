/// Welcome and health check endpoints
///
/// # Endpoints
///
/// ```text
/// GET /        -> { "message": "Welcome to the Course Management System API!", "data": null }
/// GET /health  -> { "message": "healthy", "data": { "version": "0.1.0", "users": "available", "courses": "available" } }
/// ```
///
/// Health reports `degraded` when either store file is missing. The status
/// code stays 200 so the endpoint can be used for liveness probes.

use crate::{app::AppState, response::ApiResponse};
use axum::{extract::State, http::StatusCode};
use coursehub_shared::store::RecordKind;
use serde_json::json;

/// Welcome handler
pub async fn root() -> ApiResponse {
    ApiResponse::with_status(
        StatusCode::OK,
        "Welcome to the Course Management System API!",
        None,
    )
}

/// Health check handler
pub async fn health_check(State(state): State<AppState>) -> ApiResponse {
    let store_status = |present: bool| if present { "available" } else { "missing" };

    let users = state.store().exists(RecordKind::Users).await;
    let courses = state.store().exists(RecordKind::Courses).await;

    let status = if users && courses { "healthy" } else { "degraded" };

    ApiResponse::ok(
        status,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "users": store_status(users),
            "courses": store_status(courses),
        }),
    )
}
