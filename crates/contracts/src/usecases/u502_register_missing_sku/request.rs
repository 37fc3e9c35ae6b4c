use serde::{Deserialize, Serialize};

/// Запрос на регистрацию недостающего SKU
///
/// `pending` это список unresolvedSkus последнего импорта, который клиент возвращает обратно.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSkuRequest {
    #[serde(default)]
    pub pending: Vec<String>,
    pub sku: String,
    pub name: String,
    #[serde(rename = "parentId")]
    pub parent_id: String,
}
