use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSkuResponse {
    /// Зарегистрированный SKU
    pub sku: String,
    /// Оставшиеся нерасчётные SKU
    pub remaining: Vec<String>,
}
