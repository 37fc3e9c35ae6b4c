use thiserror::Error;

/// Ошибки сервисов справочников
///
/// Оборачиваются в anyhow и распознаются в хендлерах через downcast.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}

/// HTTP статус для ошибки сервиса
pub fn status_for(err: &anyhow::Error) -> axum::http::StatusCode {
    use axum::http::StatusCode;

    match err.downcast_ref::<ServiceError>() {
        Some(ServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
        Some(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
        Some(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn service_errors_map_to_statuses() {
        let err: anyhow::Error = ServiceError::Conflict("dup".into()).into();
        assert_eq!(status_for(&err), StatusCode::CONFLICT);
        let err: anyhow::Error = ServiceError::Validation("bad".into()).into();
        assert_eq!(status_for(&err), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
