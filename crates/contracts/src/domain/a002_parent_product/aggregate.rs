use crate::domain::common::AggregateRoot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Родительский товар (агрегат a002)
///
/// Кит/набор, который несёт себестоимость для всех привязанных к нему SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentProduct {
    /// Идентификатор, выбранный оператором (например, "CABE-RIPA-7UNI")
    #[serde(rename = "parentId")]
    pub parent_id: String,

    pub name: String,

    /// Себестоимость одной единицы
    #[serde(rename = "unitCost")]
    pub unit_cost: Decimal,

    /// Количество единиц в наборе (>= 1)
    #[serde(rename = "kitQuantity")]
    pub kit_quantity: i32,

    /// Расходные материалы на набор
    #[serde(rename = "suppliesCost")]
    pub supplies_cost: Decimal,

    /// Ссылка на категорию (a001_category.id)
    #[serde(rename = "categoryId")]
    pub category_id: Option<i32>,
}

impl ParentProduct {
    /// Полная себестоимость набора: unit_cost * kit_quantity + supplies_cost
    ///
    /// `None` при переполнении Decimal.
    pub fn total_kit_cost(&self) -> Option<Decimal> {
        self.unit_cost
            .checked_mul(Decimal::from(self.kit_quantity))?
            .checked_add(self.supplies_cost)
    }

    pub fn from_dto(dto: &ParentProductDto) -> Self {
        Self {
            parent_id: dto.parent_id.trim().to_string(),
            name: dto.name.trim().to_string(),
            unit_cost: dto.unit_cost,
            kit_quantity: dto.kit_quantity,
            supplies_cost: dto.supplies_cost,
            category_id: dto.category_id,
        }
    }

    pub fn update(&mut self, dto: &ParentProductDto) {
        self.name = dto.name.trim().to_string();
        self.unit_cost = dto.unit_cost;
        self.kit_quantity = dto.kit_quantity;
        self.supplies_cost = dto.supplies_cost;
        self.category_id = dto.category_id;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.parent_id.trim().is_empty() {
            return Err("Parent product id is required".into());
        }
        if self.name.trim().is_empty() {
            return Err("Parent product name is required".into());
        }
        if self.unit_cost.is_sign_negative() {
            return Err("Unit cost cannot be negative".into());
        }
        if self.kit_quantity < 1 {
            return Err("Kit quantity must be at least 1".into());
        }
        if self.supplies_cost.is_sign_negative() {
            return Err("Supplies cost cannot be negative".into());
        }
        Ok(())
    }
}

impl AggregateRoot for ParentProduct {
    type Id = String;
    fn id(&self) -> Self::Id {
        self.parent_id.clone()
    }
    fn aggregate_index() -> &'static str {
        "a002"
    }
    fn collection_name() -> &'static str {
        "parent_product"
    }
    fn element_name() -> &'static str {
        "Produto Pai"
    }
    fn list_name() -> &'static str {
        "Produtos Pai"
    }
}

// =============================================================================
// DTO
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentProductDto {
    #[serde(rename = "parentId")]
    pub parent_id: String,
    pub name: String,
    #[serde(rename = "unitCost", default)]
    pub unit_cost: Decimal,
    #[serde(rename = "kitQuantity", default = "default_kit_quantity")]
    pub kit_quantity: i32,
    #[serde(rename = "suppliesCost", default)]
    pub supplies_cost: Decimal,
    #[serde(rename = "categoryId")]
    pub category_id: Option<i32>,
}

fn default_kit_quantity() -> i32 {
    1
}
