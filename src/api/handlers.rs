//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::state::AppState;
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Handle POST /more-time - Queue an extension request
///
/// Whether the extension applies is up to the countdown; check /status.
pub async fn more_time_handler(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse>) {
    match state.request_more_time() {
        Ok(()) => {
            info!("More-time endpoint called - request queued");
            (
                StatusCode::ACCEPTED,
                Json(ApiResponse::accepted("More time requested".to_string())),
            )
        }
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, Json(ApiResponse::error(e))),
    }
}

/// Handle GET /status - Return current countdown status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        app_name: state.app_name.clone(),
        timer: state.get_timer_state(),
        uptime: state.get_uptime(),
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
