use contracts::usecases::common::UseCaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// Файл не читается как таблица: повреждён, пуст или неизвестный формат
    #[error("Não foi possível ler o arquivo: {0}")]
    FileRead(String),

    #[error("Store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl From<ImportError> for UseCaseError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileRead(details) => {
                UseCaseError::file_read("Não foi possível ler o arquivo").with_details(details)
            }
            ImportError::Store(e) => UseCaseError::internal(format!("{:#}", e)),
        }
    }
}
