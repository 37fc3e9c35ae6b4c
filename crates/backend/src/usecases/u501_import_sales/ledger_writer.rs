use crate::shared::data::store::LedgerStore;
use contracts::domain::a004_sales_ledger::aggregate::LedgerEntry;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitSummary {
    pub inserted_orders: usize,
    pub inserted_lines: usize,
}

/// Записать пачку в журнал одной транзакцией
///
/// Пустая пачка не открывает транзакцию. При ошибке журнал остаётся прежним.
pub async fn commit<S: LedgerStore + ?Sized>(
    store: &S,
    entries: &[LedgerEntry],
) -> anyhow::Result<CommitSummary> {
    if entries.is_empty() {
        return Ok(CommitSummary::default());
    }

    let inserted_lines = store.bulk_insert(entries).await?;
    let inserted_orders = entries
        .iter()
        .map(|e| e.order_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    tracing::info!(
        "Committed {} ledger lines ({} orders)",
        inserted_lines,
        inserted_orders
    );
    Ok(CommitSummary {
        inserted_orders,
        inserted_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::store::memory::MemoryStore;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn entry(order_id: &str) -> LedgerEntry {
        LedgerEntry {
            order_id: order_id.into(),
            order_date: String::new(),
            platform: "other".into(),
            sku: "SKU-A".into(),
            quantity: 1,
            gross_revenue_per_unit: Decimal::ONE,
            total_coupons: Decimal::ZERO,
            marketplace_fees: Decimal::ZERO,
            shipping_cost: Decimal::ZERO,
            net_sale_value: Decimal::ONE,
            computed_cost: Decimal::ZERO,
            net_profit: Decimal::ONE,
            imported_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn empty_batch_does_not_touch_the_store() {
        let store = MemoryStore::default();
        *store.fail_next_insert.lock().unwrap() = true;
        assert_eq!(commit(&store, &[]).await.unwrap(), CommitSummary::default());
        assert!(*store.fail_next_insert.lock().unwrap());
    }

    #[tokio::test]
    async fn failure_writes_nothing() {
        let store = MemoryStore::default();
        *store.fail_next_insert.lock().unwrap() = true;
        assert!(commit(&store, &[entry("O1"), entry("O2")]).await.is_err());
        assert!(store.ledger().is_empty());
    }

    #[tokio::test]
    async fn summary_counts_orders_and_lines() {
        let store = MemoryStore::default();
        let summary = commit(&store, &[entry("O1"), entry("O2")]).await.unwrap();
        assert_eq!(summary.inserted_orders, 2);
        assert_eq!(summary.inserted_lines, 2);
        assert_eq!(store.ledger().len(), 2);
    }
}
