use super::dto::HealthResponse;
use super::error_response::ErrorResponse;
use super::plant_handlers::PlantState;
use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use tracing::warn;

/// Health check; reports 503 when the plant store cannot answer
pub async fn health(
    State(state): State<Arc<PlantState>>,
) -> Result<Json<HealthResponse>, ErrorResponse> {
    match state.plants.ping().await {
        Ok(()) => Ok(Json(HealthResponse {
            status: "ok".to_string(),
        })),
        Err(e) => {
            warn!("Health check failed: {}", e);
            Err(ErrorResponse::new(
                StatusCode::SERVICE_UNAVAILABLE,
                e.to_string(),
            ))
        }
    }
}

/// Fallback for unknown routes
pub async fn not_found() -> ErrorResponse {
    ErrorResponse::new(StatusCode::NOT_FOUND, "No such route")
}
