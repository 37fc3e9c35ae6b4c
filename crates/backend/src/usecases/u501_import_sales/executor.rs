use super::cost_resolver::CostIndex;
use super::error::ImportError;
use super::ledger_writer::{self, CommitSummary};
use super::normalizer::{self, ColumnMapping};
use super::raw_table::read_table;
use super::reconcile::{reconcile, ReconcileOptions};
use crate::shared::config::ImportConfig;
use crate::shared::data::store::{CatalogStore, LedgerStore};
use chrono::Utc;
use contracts::enums::Platform;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_import_sales::{
    ImportPreview, ImportSales, ImportSalesRequest, ImportSalesResponse,
};
use uuid::Uuid;

/// Executor для UseCase импорта продаж
pub struct ImportExecutor<'a, S: ?Sized> {
    store: &'a S,
    settings: &'a ImportConfig,
}

impl<'a, S> ImportExecutor<'a, S>
where
    S: CatalogStore + LedgerStore + ?Sized,
{
    pub fn new(store: &'a S, settings: &'a ImportConfig) -> Self {
        Self { store, settings }
    }

    /// Предпросмотр: платформа, колонки и первые строки без записи в журнал
    pub fn preview(&self, file_name: &str, bytes: &[u8]) -> Result<ImportPreview, ImportError> {
        let table = read_table(file_name, bytes)?;
        let mapping = ColumnMapping::from_headers(&table.headers);
        let rows = normalizer::normalize(&table);

        Ok(ImportPreview {
            detected_platform: normalizer::detect_platform(&table.headers),
            recognized_headers: mapping.recognized,
            dropped_headers: mapping.dropped,
            total_rows: rows.len(),
            rows: rows.into_iter().take(self.settings.preview_rows).collect(),
        })
    }

    /// Импорт: чтение -> нормализация -> агрегаты -> сверка -> одна транзакция записи
    pub async fn execute(
        &self,
        request: ImportSalesRequest,
        bytes: &[u8],
    ) -> Result<ImportSalesResponse, ImportError> {
        let import_id = Uuid::new_v4().to_string();
        tracing::info!(
            "[{}] {}: starting import of '{}'",
            import_id,
            ImportSales::full_name(),
            request.file_name
        );

        let table = read_table(&request.file_name, bytes)?;
        let platform = request
            .platform
            .or_else(|| normalizer::detect_platform(&table.headers))
            .unwrap_or(Platform::Other);

        let rows = normalizer::normalize(&table);
        let total_rows = rows.len();

        // Snapshot taken once; rows are checked against it and against the batch itself
        let existing = self.store.list_existing_order_ids().await?;
        let costs = CostIndex::load(self.store).await?;

        let opts = ReconcileOptions {
            platform,
            subtract_shipping: self.settings.subtract_shipping,
            imported_at: Utc::now(),
        };
        let result = reconcile(rows, &existing, |sku| costs.resolve(sku), &opts);

        tracing::info!(
            "[{}] {} rows: {} to insert, {} duplicates, {} invalid, {} unresolved SKUs",
            import_id,
            total_rows,
            result.to_insert.len(),
            result.duplicate_count,
            result.invalid_count,
            result.unresolved_skus.len()
        );

        let summary = ledger_writer::commit(self.store, &result.to_insert).await?;

        Ok(ImportSalesResponse {
            message: summary_message(&summary, result.duplicate_count, platform),
            import_id,
            platform,
            total_rows,
            inserted_orders: summary.inserted_orders,
            inserted_lines: summary.inserted_lines,
            duplicates: result.duplicate_count,
            invalid_rows: result.invalid_count,
            unresolved_skus: result.unresolved_skus,
        })
    }
}

fn summary_message(summary: &CommitSummary, duplicates: usize, platform: Platform) -> String {
    let mut message = if summary.inserted_orders == 0 {
        format!(
            "Nenhum pedido novo da plataforma '{}' foi salvo",
            platform.display_name()
        )
    } else {
        format!(
            "{} novos pedidos ({} itens) da plataforma '{}' foram processados e salvos",
            summary.inserted_orders,
            summary.inserted_lines,
            platform.display_name()
        )
    };
    if duplicates > 0 {
        message.push_str(&format!(
            ". {} pedidos já existiam no banco e foram ignorados",
            duplicates
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::test_support::temp_store;
    use crate::shared::data::store::memory::MemoryStore;
    use contracts::domain::a002_parent_product::aggregate::ParentProduct;
    use contracts::domain::a003_variation::aggregate::Variation;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const HEADER: &str = "ID do pedido;Data de criação do pedido;Número de referência SKU;Quantidade;Preço acordado;Taxa de comissão;Taxa de serviço;Taxa de transação;Cupom do vendedor;Cupom Shopee;Reembolso Shopee";

    fn csv(rows: &[&str]) -> Vec<u8> {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.into_bytes()
    }

    fn request() -> ImportSalesRequest {
        ImportSalesRequest {
            file_name: "Order.all.csv".into(),
            platform: None,
        }
    }

    fn p1() -> ParentProduct {
        ParentProduct {
            parent_id: "P1".into(),
            name: "Kit".into(),
            unit_cost: Decimal::from(10),
            kit_quantity: 2,
            supplies_cost: Decimal::from(5),
            category_id: None,
        }
    }

    fn catalog() -> MemoryStore {
        MemoryStore::with_catalog(vec![p1()], vec![Variation::new("SKU-A", "A", "P1")])
    }

    const SCENARIO_ROW: &str = "1;2024-05-01 10:00;SKU-A;2;50;3;1;1;0;0;0";

    #[tokio::test]
    async fn end_to_end_scenario() {
        let store = catalog();
        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);

        let response = executor.execute(request(), &csv(&[SCENARIO_ROW])).await.unwrap();
        assert_eq!(response.inserted_orders, 1);
        assert_eq!(response.inserted_lines, 1);
        assert_eq!(response.duplicates, 0);
        assert!(response.unresolved_skus.is_empty());
        assert_eq!(response.platform, Platform::Shopee);

        let ledger = store.ledger();
        assert_eq!(ledger.len(), 1);
        let e = &ledger[0];
        assert_eq!(e.marketplace_fees, Decimal::from(5));
        assert_eq!(e.total_coupons, Decimal::ZERO);
        assert_eq!(e.gross_revenue(), Decimal::from(100));
        assert_eq!(e.net_sale_value, Decimal::from(95));
        assert_eq!(e.total_product_cost(), Decimal::from(50));
        assert_eq!(e.net_profit, Decimal::from(45));
        assert_eq!(e.platform, "shopee");
    }

    #[tokio::test]
    async fn coupons_and_refund_reduce_net_sale_value() {
        let store = catalog();
        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);

        let file = csv(&["1;2024-05-01 10:00;SKU-A;2;50;3;1;1;4;2;1"]);
        let response = executor.execute(request(), &file).await.unwrap();
        assert_eq!(response.inserted_lines, 1);

        let e = &store.ledger()[0];
        assert_eq!(e.marketplace_fees, Decimal::from(5));
        assert_eq!(e.total_coupons, Decimal::from(7));
        assert_eq!(e.net_sale_value, Decimal::from(88));
        assert_eq!(e.net_profit, Decimal::from(38));
    }

    #[tokio::test]
    async fn overflowing_amounts_count_as_invalid_rows() {
        let store = catalog();
        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);

        let file = csv(&[
            "1;;SKU-A;2;79228162514264337593543950335;0;0;0;0;0;0",
            "2;2024-05-01 10:00;SKU-A;2;50;3;1;1;0;0;0",
        ]);
        let response = executor.execute(request(), &file).await.unwrap();
        assert_eq!(response.invalid_rows, 1);
        assert_eq!(response.inserted_lines, 1);
        assert_eq!(store.ledger()[0].order_id, "2");
    }

    #[tokio::test]
    async fn unresolved_sku_is_reported_not_written() {
        let store = catalog();
        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);

        let file = csv(&["1;2024-05-01 10:00;SKU-B;2;50;3;1;1;0;0;0"]);
        let response = executor.execute(request(), &file).await.unwrap();
        assert_eq!(response.inserted_lines, 0);
        assert_eq!(response.unresolved_skus, vec!["SKU-B"]);
        assert!(store.ledger().is_empty());
    }

    #[tokio::test]
    async fn reimport_is_idempotent() {
        let store = catalog();
        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);
        let file = csv(&[SCENARIO_ROW, "2;2024-05-01 11:00;SKU-A;1;50;3;1;1;0;0;0"]);

        executor.execute(request(), &file).await.unwrap();
        let second = executor.execute(request(), &file).await.unwrap();
        assert_eq!(second.duplicates, 2);
        assert_eq!(second.inserted_lines, 0);
        assert_eq!(store.ledger().len(), 2);
        assert!(second.message.contains("2 pedidos já existiam"));
    }

    #[tokio::test]
    async fn existing_order_is_duplicate() {
        let store = catalog();
        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);
        executor
            .execute(request(), &csv(&["100;;SKU-A;1;50;0;0;0;0;0;0"]))
            .await
            .unwrap();

        let response = executor
            .execute(request(), &csv(&["100;;SKU-A;1;70;0;0;0;0;0;0"]))
            .await
            .unwrap();
        assert_eq!(response.duplicates, 1);
        assert_eq!(response.inserted_lines, 0);
    }

    #[tokio::test]
    async fn unreadable_file_aborts_without_writes() {
        let store = catalog();
        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);

        let req = ImportSalesRequest {
            file_name: "Order.all.xlsx".into(),
            platform: None,
        };
        let err = executor.execute(req, b"not a spreadsheet").await.unwrap_err();
        assert!(matches!(err, ImportError::FileRead(_)));
        assert!(store.ledger().is_empty());
    }

    #[tokio::test]
    async fn write_failure_is_a_store_error() {
        let store = catalog();
        *store.fail_next_insert.lock().unwrap() = true;
        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);

        let err = executor.execute(request(), &csv(&[SCENARIO_ROW])).await.unwrap_err();
        assert!(matches!(err, ImportError::Store(_)));
        assert!(store.ledger().is_empty());
    }

    #[tokio::test]
    async fn explicit_platform_wins_over_detection() {
        let store = catalog();
        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);
        let req = ImportSalesRequest {
            file_name: "vendas.csv".into(),
            platform: Some(Platform::Shein),
        };

        let response = executor.execute(req, &csv(&[SCENARIO_ROW])).await.unwrap();
        assert_eq!(response.platform, Platform::Shein);
        assert_eq!(store.ledger()[0].platform, "shein");
        assert!(response.message.contains("'Shein'"));
    }

    #[tokio::test]
    async fn unknown_layout_falls_back_to_other() {
        let store = catalog();
        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);
        let text = "ID do pedido,Número de referência SKU,Quantidade,Preço acordado\n7,SKU-A,1,30\n";
        let file = text.as_bytes();

        let response = executor.execute(request(), file).await.unwrap();
        assert_eq!(response.platform, Platform::Other);
        assert_eq!(response.inserted_lines, 1);
        assert_eq!(store.ledger()[0].net_profit, Decimal::from(5));
    }

    #[tokio::test]
    async fn preview_does_not_touch_the_ledger() {
        let store = catalog();
        let settings = ImportConfig {
            preview_rows: 1,
            ..Default::default()
        };
        let executor = ImportExecutor::new(&store, &settings);
        let text = format!(
            "{};Status do pedido\n1;;SKU-A;1;10;0;0;0;0;0;0;ok\n2;;SKU-A;1;10;0;0;0;0;0;0;ok",
            HEADER
        );

        let preview = executor.preview("vendas.csv", text.as_bytes()).unwrap();
        assert_eq!(preview.detected_platform, Some(Platform::Shopee));
        assert_eq!(preview.total_rows, 2);
        assert_eq!(preview.rows.len(), 1);
        assert_eq!(preview.dropped_headers, vec!["Status do pedido"]);
        assert_eq!(preview.recognized_headers.len(), 11);
        assert!(store.ledger().is_empty());
    }

    #[tokio::test]
    async fn sqlite_import_with_batch_duplicates_and_shipping() {
        let (_dir, store) = temp_store().await;
        crate::domain::a002_parent_product::repository::insert(store.connection(), &p1())
            .await
            .unwrap();
        crate::domain::a003_variation::repository::insert(
            store.connection(),
            &Variation::new("SKU-A", "A", "P1"),
        )
        .await
        .unwrap();

        let settings = ImportConfig::default();
        let executor = ImportExecutor::new(&store, &settings);
        let file = format!(
            "{};Custo de envio\n1;2024-05-01;SKU-A;2;50;3;1;1;0;0;0;4,50\n1;2024-05-01;SKU-A;1;50;0;0;0;0;0;0;0\n",
            HEADER
        );

        let response = executor.execute(request(), file.as_bytes()).await.unwrap();
        assert_eq!(response.inserted_lines, 1);
        assert_eq!(response.duplicates, 1);

        let ledger = crate::domain::a004_sales_ledger::repository::list_all(store.connection())
            .await
            .unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].shipping_cost, Decimal::from_str("4.5").unwrap());
        assert_eq!(ledger[0].net_profit, Decimal::from_str("40.5").unwrap());
    }
}
