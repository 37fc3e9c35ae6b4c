use super::repository;
use crate::domain::a002_parent_product::repository as parent_repository;
use crate::shared::error::ServiceError;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use sea_orm::{DatabaseConnection, TransactionTrait};

pub async fn create(db: &DatabaseConnection, dto: CategoryDto) -> anyhow::Result<i32> {
    let name = dto.name.trim().to_string();
    Category::validate_name(&name).map_err(ServiceError::Validation)?;

    if repository::find_by_name(db, &name).await?.is_some() {
        return Err(ServiceError::Conflict(format!("Category '{}' already exists", name)).into());
    }

    repository::insert(db, &name).await
}

pub async fn update(db: &DatabaseConnection, dto: CategoryDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .ok_or_else(|| ServiceError::Validation("Category id is required".into()))?;

    let mut category = repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Category {}", id)))?;

    category.name = dto.name.trim().to_string();
    category.validate().map_err(ServiceError::Validation)?;

    if let Some(other) = repository::find_by_name(db, &category.name).await? {
        if other.id != id {
            return Err(ServiceError::Conflict(format!(
                "Category '{}' already exists",
                category.name
            ))
            .into());
        }
    }

    repository::update(db, &category).await
}

/// Удалить категорию; товары этой категории остаются без категории
pub async fn delete(db: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let txn = db.begin().await?;
    parent_repository::clear_category(&txn, id).await?;
    let deleted = repository::delete(&txn, id).await?;
    txn.commit().await?;
    Ok(deleted)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Category>> {
    repository::get_by_id(db, id).await
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Category>> {
    repository::list_all(db).await
}
