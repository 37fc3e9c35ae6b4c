use axum::{extract::State, http::StatusCode, Json};

use crate::shared::app_state::AppState;
use crate::shared::logger;

/// GET /api/logs
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<contracts::shared::logger::LogEntry>>, StatusCode> {
    match logger::repository::get_all_logs(state.store.connection()).await {
        Ok(logs) => Ok(Json(logs)),
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/logs
pub async fn clear_all(State(state): State<AppState>) -> StatusCode {
    match logger::repository::clear_all_logs(state.store.connection()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
