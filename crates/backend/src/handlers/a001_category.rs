use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use super::{internal_error, service_error, ApiError};
use crate::domain::a001_category;
use crate::shared::app_state::AppState;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};

/// GET /api/category
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Category>>, StatusCode> {
    a001_category::service::list_all(state.store.connection())
        .await
        .map(Json)
        .map_err(internal_error)
}

/// GET /api/category/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>, StatusCode> {
    match a001_category::service::get_by_id(state.store.connection(), id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal_error(e)),
    }
}

/// POST /api/category (с id - обновление)
pub async fn upsert(
    State(state): State<AppState>,
    Json(dto): Json<CategoryDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let db = state.store.connection();
    let result = match dto.id {
        Some(id) => a001_category::service::update(db, dto).await.map(|_| id),
        None => a001_category::service::create(db, dto).await,
    };
    match result {
        Ok(id) => Ok(Json(json!({ "id": id }))),
        Err(e) => Err(service_error(e)),
    }
}

/// DELETE /api/category/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> StatusCode {
    match a001_category::service::delete(state.store.connection(), id).await {
        Ok(true) => StatusCode::OK,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => internal_error(e),
    }
}
