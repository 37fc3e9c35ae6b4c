pub mod a001_category;
pub mod a002_parent_product;
pub mod a003_variation;
pub mod a004_sales_ledger;
pub mod logs;
pub mod u501_import_sales;
pub mod u502_register_missing_sku;

use crate::shared::error::{status_for, ServiceError};
use axum::http::StatusCode;
use axum::Json;
use contracts::usecases::common::UseCaseError;

/// Ошибка с JSON телом для операций записи и use case'ов
pub type ApiError = (StatusCode, Json<UseCaseError>);

/// anyhow из сервиса -> статус + тело с сообщением
pub fn service_error(e: anyhow::Error) -> ApiError {
    let status = status_for(&e);
    let body = match e.downcast_ref::<ServiceError>() {
        Some(ServiceError::Validation(m)) => UseCaseError::validation(m.clone()),
        Some(ServiceError::NotFound(_)) => UseCaseError::not_found(e.to_string()),
        Some(ServiceError::Conflict(m)) => UseCaseError::conflict(m.clone()),
        None => {
            tracing::error!("Service call failed: {:#}", e);
            UseCaseError::internal(e.to_string())
        }
    };
    (status, Json(body))
}

pub fn internal_error(e: anyhow::Error) -> StatusCode {
    tracing::error!("Request failed: {:#}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}
