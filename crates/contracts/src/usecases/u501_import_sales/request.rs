use crate::enums::Platform;
use serde::{Deserialize, Serialize};

/// Запрос на импорт файла продаж
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSalesRequest {
    /// Имя загруженного файла (по расширению выбирается формат)
    #[serde(rename = "fileName")]
    pub file_name: String,

    /// Платформа, подтверждённая оператором. Если не задана, берётся автоопределение
    pub platform: Option<Platform>,
}
