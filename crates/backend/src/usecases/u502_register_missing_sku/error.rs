use crate::shared::data::store::StoreWriteError;
use contracts::usecases::common::UseCaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemediationError {
    #[error("{0}")]
    Validation(String),

    #[error("SKU '{0}' is not in the pending list")]
    NotPending(String),

    #[error("Parent product '{0}' does not exist")]
    UnknownParentProduct(String),

    #[error("SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<StoreWriteError> for RemediationError {
    fn from(err: StoreWriteError) -> Self {
        match err {
            StoreWriteError::DuplicateSku(sku) => RemediationError::DuplicateSku(sku),
            StoreWriteError::Other(e) => RemediationError::Store(e),
        }
    }
}

impl From<RemediationError> for UseCaseError {
    fn from(err: RemediationError) -> Self {
        let message = err.to_string();
        match err {
            RemediationError::Validation(_) | RemediationError::NotPending(_) => {
                UseCaseError::validation(message)
            }
            RemediationError::UnknownParentProduct(_) => UseCaseError::not_found(message),
            RemediationError::DuplicateSku(_) => UseCaseError::conflict(message),
            RemediationError::Store(_) => UseCaseError::internal(message),
        }
    }
}
