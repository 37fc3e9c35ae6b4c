use axum::{extract::State, http::StatusCode, Json};

use super::{internal_error, ApiError};
use crate::shared::app_state::AppState;
use crate::usecases::u502_register_missing_sku::{RemediationError, RemediationExecutor};
use contracts::domain::a002_parent_product::aggregate::ParentProduct;
use contracts::usecases::u502_register_missing_sku::{RegisterSkuRequest, RegisterSkuResponse};

/// GET /api/u502/targets
pub async fn list_targets(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParentProduct>>, StatusCode> {
    RemediationExecutor::new(&state.store)
        .list_targets()
        .await
        .map(Json)
        .map_err(internal_error)
}

/// POST /api/u502/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterSkuRequest>,
) -> Result<Json<RegisterSkuResponse>, ApiError> {
    match RemediationExecutor::new(&state.store).register(request).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            let status = match &err {
                RemediationError::Validation(_) | RemediationError::NotPending(_) => {
                    StatusCode::BAD_REQUEST
                }
                RemediationError::UnknownParentProduct(_) => StatusCode::NOT_FOUND,
                RemediationError::DuplicateSku(_) => StatusCode::CONFLICT,
                RemediationError::Store(e) => {
                    tracing::error!("SKU registration failed: {:#}", e);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            Err((status, Json(err.into())))
        }
    }
}
