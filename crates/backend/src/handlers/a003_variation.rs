use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

use super::{internal_error, service_error, ApiError};
use crate::domain::a003_variation;
use crate::shared::app_state::AppState;
use crate::usecases::u501_import_sales::cost_resolver::resolve_cost;
use contracts::domain::a003_variation::aggregate::{Variation, VariationDto};

/// GET /api/variation
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Variation>>, StatusCode> {
    a003_variation::service::list_all(state.store.connection())
        .await
        .map(Json)
        .map_err(internal_error)
}

/// GET /api/variation/:sku
pub async fn get_by_sku(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<Variation>, StatusCode> {
    match a003_variation::service::get_by_sku(state.store.connection(), &sku).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal_error(e)),
    }
}

/// GET /api/variation/:sku/cost
///
/// 404 когда себестоимость не определяется (нет вариации или товара)
pub async fn get_cost(
    State(state): State<AppState>,
    Path(sku): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    match resolve_cost(&state.store, &sku).await {
        Ok(Some(cost)) => Ok(Json(json!({ "sku": sku.trim(), "unitCost": cost }))),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(internal_error(e)),
    }
}

/// POST /api/variation
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<VariationDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    match a003_variation::service::create(state.store.connection(), dto).await {
        Ok(sku) => Ok(Json(json!({ "sku": sku }))),
        Err(e) => Err(service_error(e)),
    }
}

/// PUT /api/variation/:sku
pub async fn update(
    State(state): State<AppState>,
    Path(sku): Path<String>,
    Json(dto): Json<VariationDto>,
) -> Result<StatusCode, ApiError> {
    a003_variation::service::update(state.store.connection(), &sku, dto)
        .await
        .map(|_| StatusCode::OK)
        .map_err(service_error)
}

/// DELETE /api/variation/:sku
pub async fn delete(State(state): State<AppState>, Path(sku): Path<String>) -> StatusCode {
    match a003_variation::service::delete(state.store.connection(), &sku).await {
        Ok(true) => StatusCode::OK,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => internal_error(e),
    }
}
