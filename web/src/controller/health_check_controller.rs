use crate::response::status::{HealthResponse, RootResponse};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;

/// GET a fixed greeting identifying the service
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is reachable", body = RootResponse),
    )
)]
pub async fn index() -> impl IntoResponse {
    Json(RootResponse {
        message: "Video Meeting AI Assistant API".to_string(),
    })
}

/// GET liveness status with the server's current time
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API router is up and responding to requests", body = HealthResponse),
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}
