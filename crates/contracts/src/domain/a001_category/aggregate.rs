use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Категория товаров (агрегат a001)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Автоинкрементный ID
    pub id: i32,
    /// Уникальное название
    pub name: String,
}

impl Category {
    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        Self::validate_name(&self.name)
    }
}

impl AggregateRoot for Category {
    type Id = i32;
    fn id(&self) -> Self::Id {
        self.id
    }
    fn aggregate_index() -> &'static str {
        "a001"
    }
    fn collection_name() -> &'static str {
        "category"
    }
    fn element_name() -> &'static str {
        "Categoria"
    }
    fn list_name() -> &'static str {
        "Categorias"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub id: Option<i32>,
    pub name: String,
}
