//! Сверка строк выгрузки с журналом: дубликаты, невалидные строки, себестоимость

use super::aggregates::{compute_aggregates, whole_quantity};
use chrono::{DateTime, Utc};
use contracts::domain::a004_sales_ledger::aggregate::LedgerEntry;
use contracts::enums::Platform;
use contracts::usecases::u501_import_sales::SaleRow;
use rust_decimal::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    pub platform: Platform,
    pub subtract_shipping: bool,
    pub imported_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Reconciliation {
    pub to_insert: Vec<LedgerEntry>,
    pub duplicate_count: usize,
    pub invalid_count: usize,
    /// Уникальные SKU без себестоимости в порядке первого появления
    pub unresolved_skus: Vec<String>,
}

/// Разобрать строки на новые записи журнала, дубликаты и нераспознанные SKU
///
/// Порядок проверок для строки:
/// 1. ID заказа уже в журнале или уже принят в этой пачке -> дубликат
/// 2. пустой ID, количество < 1 или переполнение сумм -> невалидная строка
/// 3. себестоимость SKU не найдена -> SKU в `unresolved_skus`, строка пропускается
/// 4. иначе строка становится записью журнала
///
/// Строка с нераспознанным SKU не занимает свой ID заказа: после регистрации
/// SKU повторный импорт того же файла её добавит.
pub fn reconcile<F>(
    rows: Vec<SaleRow>,
    existing: &HashSet<String>,
    resolve_cost: F,
    opts: &ReconcileOptions,
) -> Reconciliation
where
    F: Fn(&str) -> Option<Decimal>,
{
    let mut result = Reconciliation::default();
    let mut accepted: HashSet<String> = HashSet::new();
    let mut unresolved_seen: HashSet<String> = HashSet::new();

    for row in rows {
        let order_id = row.order_id.trim();

        if existing.contains(order_id) || accepted.contains(order_id) {
            result.duplicate_count += 1;
            continue;
        }

        let quantity = whole_quantity(&row);
        if order_id.is_empty() || quantity < Decimal::ONE {
            result.invalid_count += 1;
            continue;
        }
        let order_id = order_id.to_string();

        let Some(priced) = compute_aggregates(row) else {
            result.invalid_count += 1;
            continue;
        };

        let sku = priced.row.sku.trim();
        let Some(unit_cost) = resolve_cost(sku) else {
            if !sku.is_empty() && unresolved_seen.insert(sku.to_string()) {
                result.unresolved_skus.push(sku.to_string());
            }
            continue;
        };

        let Some(quantity) = quantity.to_i32() else {
            result.invalid_count += 1;
            continue;
        };

        let Some(profit) = priced.profit(unit_cost, opts.subtract_shipping) else {
            result.invalid_count += 1;
            continue;
        };
        accepted.insert(order_id.clone());
        result.to_insert.push(LedgerEntry {
            order_id,
            order_date: priced.row.order_date.clone(),
            platform: opts.platform.code().to_string(),
            sku: sku.to_string(),
            quantity,
            gross_revenue_per_unit: priced.row.unit_price,
            total_coupons: priced.total_coupons,
            marketplace_fees: priced.marketplace_fees,
            shipping_cost: priced.row.shipping_cost,
            net_sale_value: profit.net_sale_value,
            computed_cost: unit_cost,
            net_profit: profit.net_profit,
            imported_at: opts.imported_at,
        });
    }

    result
}
