use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::internal_error;
use crate::domain::a004_sales_ledger;
use crate::shared::app_state::AppState;
use contracts::domain::a004_sales_ledger::aggregate::LedgerEntry;
use contracts::enums::Platform;

#[derive(Deserialize)]
pub struct LedgerQuery {
    pub platform: Option<String>,
}

/// GET /api/sales_ledger?platform=shopee
pub async fn list_all(
    State(state): State<AppState>,
    Query(query): Query<LedgerQuery>,
) -> Result<Json<Vec<LedgerEntry>>, StatusCode> {
    let db = state.store.connection();
    let result = match query.platform.as_deref() {
        Some(code) => {
            let platform = Platform::from_code(code).ok_or(StatusCode::BAD_REQUEST)?;
            a004_sales_ledger::service::list_by_platform(db, platform).await
        }
        None => a004_sales_ledger::service::list_all(db).await,
    };
    result.map(Json).map_err(internal_error)
}
