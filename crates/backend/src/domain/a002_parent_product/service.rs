use super::repository;
use crate::domain::a001_category::repository as category_repository;
use crate::domain::a003_variation::repository as variation_repository;
use crate::shared::error::ServiceError;
use contracts::domain::a002_parent_product::aggregate::{ParentProduct, ParentProductDto};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

async fn ensure_category_exists<C: ConnectionTrait>(
    db: &C,
    category_id: Option<i32>,
) -> anyhow::Result<()> {
    if let Some(id) = category_id {
        if category_repository::get_by_id(db, id).await?.is_none() {
            return Err(ServiceError::Validation(format!("Category {} does not exist", id)).into());
        }
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, dto: ParentProductDto) -> anyhow::Result<String> {
    let aggregate = ParentProduct::from_dto(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_category_exists(db, aggregate.category_id).await?;

    if repository::get_by_id(db, &aggregate.parent_id).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "Parent product '{}' already exists",
            aggregate.parent_id
        ))
        .into());
    }

    repository::insert(db, &aggregate).await?;
    Ok(aggregate.parent_id)
}

/// Обновить товар; идентификатор берётся из пути, а не из тела
pub async fn update(
    db: &DatabaseConnection,
    parent_id: &str,
    dto: ParentProductDto,
) -> anyhow::Result<()> {
    let mut aggregate = repository::get_by_id(db, parent_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("Parent product '{}'", parent_id)))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    ensure_category_exists(db, aggregate.category_id).await?;

    repository::update(db, &aggregate).await
}

/// Удалить товар вместе с его вариациями
pub async fn delete(db: &DatabaseConnection, parent_id: &str) -> anyhow::Result<bool> {
    let txn = db.begin().await?;
    let removed = variation_repository::delete_by_parent(&txn, parent_id).await?;
    let deleted = repository::delete(&txn, parent_id).await?;
    txn.commit().await?;
    if deleted {
        tracing::info!(
            "Deleted parent product {} with {} variations",
            parent_id,
            removed
        );
    }
    Ok(deleted)
}

pub async fn get_by_id(
    db: &DatabaseConnection,
    parent_id: &str,
) -> anyhow::Result<Option<ParentProduct>> {
    repository::get_by_id(db, parent_id).await
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<ParentProduct>> {
    repository::list_all(db).await
}
