use super::row::SaleRow;
use crate::enums::Platform;
use serde::{Deserialize, Serialize};

/// Итог импорта файла продаж
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSalesResponse {
    /// ID запуска импорта (для корреляции логов)
    #[serde(rename = "importId")]
    pub import_id: String,

    pub platform: Platform,

    /// Строк в файле (без заголовка)
    #[serde(rename = "totalRows")]
    pub total_rows: usize,

    /// Новых заказов (уникальных ID заказа)
    #[serde(rename = "insertedOrders")]
    pub inserted_orders: usize,

    /// Записанных строк журнала
    #[serde(rename = "insertedLines")]
    pub inserted_lines: usize,

    /// Строк, пропущенных как уже импортированные
    pub duplicates: usize,

    /// Строк без ID заказа или с количеством <= 0
    #[serde(rename = "invalidRows")]
    pub invalid_rows: usize,

    /// SKU без себестоимости, в порядке первого появления
    #[serde(rename = "unresolvedSkus")]
    pub unresolved_skus: Vec<String>,

    pub message: String,
}

/// Предпросмотр файла до обработки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportPreview {
    #[serde(rename = "detectedPlatform")]
    pub detected_platform: Option<Platform>,

    /// Заголовки, которые будут использованы
    #[serde(rename = "recognizedHeaders")]
    pub recognized_headers: Vec<String>,

    /// Заголовки, которые будут отброшены
    #[serde(rename = "droppedHeaders")]
    pub dropped_headers: Vec<String>,

    #[serde(rename = "totalRows")]
    pub total_rows: usize,

    pub rows: Vec<SaleRow>,
}
