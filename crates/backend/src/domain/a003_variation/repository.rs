use contracts::domain::a003_variation::aggregate::Variation;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_variation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub sku: String,
    pub name: String,
    pub parent_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Variation {
    fn from(m: Model) -> Self {
        Variation {
            sku: m.sku,
            name: m.name,
            parent_id: m.parent_id,
        }
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<Variation>> {
    let items = Entity::find()
        .order_by_asc(Column::Sku)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Точный поиск по SKU
/// ВАЖНО: sku должен быть уже trimmed
pub async fn get_by_sku<C: ConnectionTrait>(db: &C, sku: &str) -> anyhow::Result<Option<Variation>> {
    let result = Entity::find_by_id(sku.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn list_by_parent<C: ConnectionTrait>(
    db: &C,
    parent_id: &str,
) -> anyhow::Result<Vec<Variation>> {
    let items = Entity::find()
        .filter(Column::ParentId.eq(parent_id))
        .order_by_asc(Column::Sku)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Вставка; нарушение уникальности SKU приходит как DbErr внутри anyhow
pub async fn insert<C: ConnectionTrait>(db: &C, variation: &Variation) -> anyhow::Result<()> {
    let active = ActiveModel {
        sku: Set(variation.sku.clone()),
        name: Set(variation.name.clone()),
        parent_id: Set(variation.parent_id.clone()),
    };
    active.insert(db).await?;
    Ok(())
}

pub async fn update<C: ConnectionTrait>(db: &C, variation: &Variation) -> anyhow::Result<()> {
    let active = ActiveModel {
        sku: Set(variation.sku.clone()),
        name: Set(variation.name.clone()),
        parent_id: Set(variation.parent_id.clone()),
    };
    active.update(db).await?;
    Ok(())
}

pub async fn delete<C: ConnectionTrait>(db: &C, sku: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(sku.to_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}

pub async fn delete_by_parent<C: ConnectionTrait>(db: &C, parent_id: &str) -> anyhow::Result<u64> {
    let result = Entity::delete_many()
        .filter(Column::ParentId.eq(parent_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Является ли ошибка вставки нарушением уникальности
///
/// SQLite сообщает о дубликате PRIMARY KEY тем же текстом, что и о UNIQUE индексе.
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<DbErr>() {
        Some(db_err) => {
            matches!(
                db_err.sql_err(),
                Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
            ) || db_err.to_string().contains("UNIQUE constraint failed")
        }
        None => false,
    }
}
