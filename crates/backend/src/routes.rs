use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::shared::app_state::AppState;

/// Sales exports easily exceed axum's default 2 MB body limit
const UPLOAD_LIMIT_BYTES: usize = 50 * 1024 * 1024;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Category
        .route(
            "/api/category",
            get(handlers::a001_category::list_all).post(handlers::a001_category::upsert),
        )
        .route(
            "/api/category/:id",
            get(handlers::a001_category::get_by_id).delete(handlers::a001_category::delete),
        )
        // A002 Parent product
        .route(
            "/api/parent_product",
            get(handlers::a002_parent_product::list_all)
                .post(handlers::a002_parent_product::create),
        )
        .route(
            "/api/parent_product/:id",
            get(handlers::a002_parent_product::get_by_id)
                .put(handlers::a002_parent_product::update)
                .delete(handlers::a002_parent_product::delete),
        )
        // A003 Variation
        .route(
            "/api/variation",
            get(handlers::a003_variation::list_all).post(handlers::a003_variation::create),
        )
        .route(
            "/api/variation/:sku",
            get(handlers::a003_variation::get_by_sku)
                .put(handlers::a003_variation::update)
                .delete(handlers::a003_variation::delete),
        )
        .route(
            "/api/variation/:sku/cost",
            get(handlers::a003_variation::get_cost),
        )
        // A004 Sales ledger
        .route(
            "/api/sales_ledger",
            get(handlers::a004_sales_ledger::list_all),
        )
        // U501 Import sales
        .route(
            "/api/u501/import/preview",
            post(handlers::u501_import_sales::preview)
                .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route(
            "/api/u501/import",
            post(handlers::u501_import_sales::import)
                .layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        // U502 Register missing SKU
        .route(
            "/api/u502/targets",
            get(handlers::u502_register_missing_sku::list_targets),
        )
        .route(
            "/api/u502/register",
            post(handlers::u502_register_missing_sku::register),
        )
        // System log
        .route(
            "/api/logs",
            get(handlers::logs::list_all).delete(handlers::logs::clear_all),
        )
        .layer(middleware::from_fn(request_logger))
        .with_state(state)
}

/// Простой middleware для логирования запросов
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    tracing::info!(
        "{:>5}ms | {} {:>6} {}",
        start.elapsed().as_millis(),
        response.status().as_u16(),
        method,
        uri.path()
    );
    response
}
