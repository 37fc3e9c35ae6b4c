use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use super::{internal_error, service_error, ApiError};
use crate::domain::a002_parent_product;
use crate::shared::app_state::AppState;
use contracts::domain::a002_parent_product::aggregate::{ParentProduct, ParentProductDto};

/// GET /api/parent_product
pub async fn list_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParentProduct>>, StatusCode> {
    a002_parent_product::service::list_all(state.store.connection())
        .await
        .map(Json)
        .map_err(internal_error)
}

/// GET /api/parent_product/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ParentProduct>, StatusCode> {
    match a002_parent_product::service::get_by_id(state.store.connection(), &id).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal_error(e)),
    }
}

/// POST /api/parent_product
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<ParentProductDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match a002_parent_product::service::create(state.store.connection(), dto).await {
        Ok(id) => Ok(Json(json!({ "parentId": id }))),
        Err(e) => Err(service_error(e)),
    }
}

/// PUT /api/parent_product/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<ParentProductDto>,
) -> Result<StatusCode, ApiError> {
    a002_parent_product::service::update(state.store.connection(), &id, dto)
        .await
        .map(|_| StatusCode::OK)
        .map_err(service_error)
}

/// DELETE /api/parent_product/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    match a002_parent_product::service::delete(state.store.connection(), &id).await {
        Ok(true) => StatusCode::OK,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => internal_error(e),
    }
}
