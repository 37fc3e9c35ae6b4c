use crate::shared::money::{decimal_from_db, decimal_to_db};
use chrono::{DateTime, Utc};
use contracts::domain::a004_sales_ledger::aggregate::LedgerEntry;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a004_sales_ledger")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub order_id: String,
    pub order_date: String,
    pub platform: String,
    pub sku: String,
    pub quantity: i32,
    pub gross_revenue_per_unit: String,
    pub total_coupons: String,
    pub marketplace_fees: String,
    pub shipping_cost: String,
    pub net_sale_value: String,
    pub computed_cost: String,
    pub net_profit: String,
    /// RFC3339
    pub imported_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LedgerEntry {
    fn from(m: Model) -> Self {
        let imported_at = DateTime::parse_from_rfc3339(&m.imported_at)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_default();

        LedgerEntry {
            gross_revenue_per_unit: decimal_from_db(
                &m.gross_revenue_per_unit,
                "gross_revenue_per_unit",
            ),
            total_coupons: decimal_from_db(&m.total_coupons, "total_coupons"),
            marketplace_fees: decimal_from_db(&m.marketplace_fees, "marketplace_fees"),
            shipping_cost: decimal_from_db(&m.shipping_cost, "shipping_cost"),
            net_sale_value: decimal_from_db(&m.net_sale_value, "net_sale_value"),
            computed_cost: decimal_from_db(&m.computed_cost, "computed_cost"),
            net_profit: decimal_from_db(&m.net_profit, "net_profit"),
            order_id: m.order_id,
            order_date: m.order_date,
            platform: m.platform,
            sku: m.sku,
            quantity: m.quantity,
            imported_at,
        }
    }
}

fn to_active(entry: &LedgerEntry) -> ActiveModel {
    ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        order_id: Set(entry.order_id.clone()),
        order_date: Set(entry.order_date.clone()),
        platform: Set(entry.platform.clone()),
        sku: Set(entry.sku.clone()),
        quantity: Set(entry.quantity),
        gross_revenue_per_unit: Set(decimal_to_db(entry.gross_revenue_per_unit)),
        total_coupons: Set(decimal_to_db(entry.total_coupons)),
        marketplace_fees: Set(decimal_to_db(entry.marketplace_fees)),
        shipping_cost: Set(decimal_to_db(entry.shipping_cost)),
        net_sale_value: Set(decimal_to_db(entry.net_sale_value)),
        computed_cost: Set(decimal_to_db(entry.computed_cost)),
        net_profit: Set(decimal_to_db(entry.net_profit)),
        imported_at: Set(entry.imported_at.to_rfc3339()),
    }
}

/// Rows per INSERT statement; keeps bind parameters under SQLite's limit
const INSERT_CHUNK: usize = 50;

/// Журнал продаж по дате заказа
pub async fn list_all<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<LedgerEntry>> {
    let items = Entity::find()
        .order_by_asc(Column::OrderDate)
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn list_by_platform<C: ConnectionTrait>(
    db: &C,
    platform_code: &str,
) -> anyhow::Result<Vec<LedgerEntry>> {
    let items = Entity::find()
        .filter(Column::Platform.eq(platform_code))
        .order_by_asc(Column::OrderDate)
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Все ID заказов, уже записанных в журнал
pub async fn list_order_ids<C: ConnectionTrait>(db: &C) -> anyhow::Result<HashSet<String>> {
    let ids: Vec<String> = Entity::find()
        .select_only()
        .column(Column::OrderId)
        .into_tuple()
        .all(db)
        .await?;
    Ok(ids.into_iter().collect())
}

/// Вставить пачку записей; вызывается внутри транзакции
pub async fn insert_many<C: ConnectionTrait>(db: &C, entries: &[LedgerEntry]) -> anyhow::Result<usize> {
    for chunk in entries.chunks(INSERT_CHUNK) {
        Entity::insert_many(chunk.iter().map(to_active)).exec(db).await?;
    }
    Ok(entries.len())
}
