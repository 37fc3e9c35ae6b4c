use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use super::ApiError;
use crate::shared::app_state::AppState;
use crate::shared::logger;
use crate::usecases::u501_import_sales::ImportExecutor;
use contracts::enums::Platform;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u501_import_sales::{
    ImportPreview, ImportSalesRequest, ImportSalesResponse,
};

/// Загруженный файл и необязательная платформа из multipart формы
struct Upload {
    file_name: String,
    bytes: Vec<u8>,
    platform: Option<Platform>,
}

fn bad_request(error: UseCaseError) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(error))
}

async fn read_upload(mut multipart: Multipart) -> Result<Upload, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut platform = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(UseCaseError::file_read(e.to_string())))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| bad_request(UseCaseError::file_read(e.to_string())))?;
                file = Some((file_name, bytes.to_vec()));
            }
            Some("platform") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| bad_request(UseCaseError::validation(e.to_string())))?;
                if !text.trim().is_empty() {
                    platform = Some(Platform::from_code(&text).ok_or_else(|| {
                        bad_request(UseCaseError::validation(format!(
                            "Unknown platform '{}'",
                            text.trim()
                        )))
                    })?);
                }
            }
            _ => {}
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| bad_request(UseCaseError::validation("Field 'file' is required")))?;
    Ok(Upload {
        file_name,
        bytes,
        platform,
    })
}

fn import_error(err: crate::usecases::u501_import_sales::ImportError) -> ApiError {
    use crate::usecases::u501_import_sales::ImportError;

    let status = match &err {
        ImportError::FileRead(_) => StatusCode::BAD_REQUEST,
        ImportError::Store(e) => {
            tracing::error!("Import failed: {:#}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(err.into()))
}

/// POST /api/u501/import/preview
pub async fn preview(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImportPreview>, ApiError> {
    let upload = read_upload(multipart).await?;
    ImportExecutor::new(&state.store, &state.config.import)
        .preview(&upload.file_name, &upload.bytes)
        .map(Json)
        .map_err(import_error)
}

/// POST /api/u501/import
pub async fn import(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ImportSalesResponse>, ApiError> {
    let upload = read_upload(multipart).await?;
    let request = ImportSalesRequest {
        file_name: upload.file_name,
        platform: upload.platform,
    };

    let response = ImportExecutor::new(&state.store, &state.config.import)
        .execute(request, &upload.bytes)
        .await
        .map_err(import_error)?;

    logger::log(state.store.connection(), "import", &response.message);
    Ok(Json(response))
}
