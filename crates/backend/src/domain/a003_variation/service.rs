use super::repository;
use crate::domain::a002_parent_product::repository as parent_repository;
use crate::shared::error::ServiceError;
use contracts::domain::a003_variation::aggregate::{Variation, VariationDto};
use sea_orm::DatabaseConnection;

pub async fn create(db: &DatabaseConnection, dto: VariationDto) -> anyhow::Result<String> {
    let variation = Variation::new(&dto.sku, &dto.name, &dto.parent_id);
    variation.validate().map_err(ServiceError::Validation)?;

    let parent_id = variation
        .parent_ref()
        .ok_or_else(|| ServiceError::Validation("Parent product is required".into()))?;
    if parent_repository::get_by_id(db, parent_id).await?.is_none() {
        return Err(ServiceError::NotFound(format!("Parent product '{}'", parent_id)).into());
    }

    if repository::get_by_sku(db, &variation.sku).await?.is_some() {
        return Err(ServiceError::Conflict(format!("SKU '{}' already exists", variation.sku)).into());
    }

    repository::insert(db, &variation).await?;
    Ok(variation.sku)
}

/// Переименовать вариацию или перенести её к другому товару
pub async fn update(db: &DatabaseConnection, sku: &str, dto: VariationDto) -> anyhow::Result<()> {
    let mut variation = repository::get_by_sku(db, sku.trim())
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("SKU '{}'", sku)))?;

    let updated = Variation::new(&variation.sku, &dto.name, &dto.parent_id);
    updated.validate().map_err(ServiceError::Validation)?;
    if let Some(parent_id) = updated.parent_ref() {
        if parent_repository::get_by_id(db, parent_id).await?.is_none() {
            return Err(ServiceError::NotFound(format!("Parent product '{}'", parent_id)).into());
        }
    }

    variation.parent_id = updated.parent_ref().map(str::to_string);
    variation.name = updated.name;
    repository::update(db, &variation).await
}

pub async fn delete(db: &DatabaseConnection, sku: &str) -> anyhow::Result<bool> {
    repository::delete(db, sku.trim()).await
}

pub async fn get_by_sku(db: &DatabaseConnection, sku: &str) -> anyhow::Result<Option<Variation>> {
    repository::get_by_sku(db, sku.trim()).await
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Variation>> {
    repository::list_all(db).await
}
