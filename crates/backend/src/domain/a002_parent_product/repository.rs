use crate::shared::money::{decimal_from_db, decimal_to_db};
use contracts::domain::a002_parent_product::aggregate::ParentProduct;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_parent_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub parent_id: String,
    pub name: String,
    /// Decimal as TEXT
    pub unit_cost: String,
    pub kit_quantity: i32,
    /// Decimal as TEXT
    pub supplies_cost: String,
    pub category_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ParentProduct {
    fn from(m: Model) -> Self {
        ParentProduct {
            unit_cost: decimal_from_db(&m.unit_cost, "unit_cost"),
            supplies_cost: decimal_from_db(&m.supplies_cost, "supplies_cost"),
            parent_id: m.parent_id,
            name: m.name,
            kit_quantity: m.kit_quantity,
            category_id: m.category_id,
        }
    }
}

fn to_active(aggregate: &ParentProduct) -> ActiveModel {
    ActiveModel {
        parent_id: Set(aggregate.parent_id.clone()),
        name: Set(aggregate.name.clone()),
        unit_cost: Set(decimal_to_db(aggregate.unit_cost)),
        kit_quantity: Set(aggregate.kit_quantity),
        supplies_cost: Set(decimal_to_db(aggregate.supplies_cost)),
        category_id: Set(aggregate.category_id),
    }
}

pub async fn list_all<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<ParentProduct>> {
    let items = Entity::find()
        .order_by_asc(Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id<C: ConnectionTrait>(
    db: &C,
    parent_id: &str,
) -> anyhow::Result<Option<ParentProduct>> {
    let result = Entity::find_by_id(parent_id.to_string()).one(db).await?;
    Ok(result.map(Into::into))
}

pub async fn insert<C: ConnectionTrait>(db: &C, aggregate: &ParentProduct) -> anyhow::Result<()> {
    to_active(aggregate).insert(db).await?;
    Ok(())
}

pub async fn update<C: ConnectionTrait>(db: &C, aggregate: &ParentProduct) -> anyhow::Result<()> {
    to_active(aggregate).update(db).await?;
    Ok(())
}

pub async fn delete<C: ConnectionTrait>(db: &C, parent_id: &str) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(parent_id.to_string()).exec(db).await?;
    Ok(result.rows_affected > 0)
}

/// Отвязать все товары от удаляемой категории
pub async fn clear_category<C: ConnectionTrait>(db: &C, category_id: i32) -> anyhow::Result<u64> {
    let result = Entity::update_many()
        .col_expr(Column::CategoryId, Expr::value(Option::<i32>::None))
        .filter(Column::CategoryId.eq(category_id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}
