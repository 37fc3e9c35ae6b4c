use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Вариация (SKU), агрегат a003
///
/// SKU без родительского товара считается нерасчётным: себестоимость по нему не определена.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    pub sku: String,
    pub name: String,
    /// Ссылка на родительский товар (a002_parent_product.parent_id)
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}

impl Variation {
    pub fn new(sku: &str, name: &str, parent_id: &str) -> Self {
        Self {
            sku: sku.trim().to_string(),
            name: name.trim().to_string(),
            parent_id: Some(parent_id.trim().to_string()),
        }
    }

    /// ID родителя, если он задан и не пустой
    pub fn parent_ref(&self) -> Option<&str> {
        self.parent_id
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.sku.trim().is_empty() {
            return Err("SKU is required".into());
        }
        if self.name.trim().is_empty() {
            return Err("Variation name is required".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Variation {
    type Id = String;
    fn id(&self) -> Self::Id {
        self.sku.clone()
    }
    fn aggregate_index() -> &'static str {
        "a003"
    }
    fn collection_name() -> &'static str {
        "variation"
    }
    fn element_name() -> &'static str {
        "Variação"
    }
    fn list_name() -> &'static str {
        "Variações (SKUs)"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VariationDto {
    pub sku: String,
    pub name: String,
    #[serde(rename = "parentId")]
    pub parent_id: String,
}
