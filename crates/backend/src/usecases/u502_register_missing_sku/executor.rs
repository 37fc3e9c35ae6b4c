use super::error::RemediationError;
use crate::shared::data::store::CatalogStore;
use contracts::domain::a002_parent_product::aggregate::ParentProduct;
use contracts::domain::a003_variation::aggregate::Variation;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_register_missing_sku::{
    RegisterMissingSku, RegisterSkuRequest, RegisterSkuResponse,
};

/// Executor для регистрации SKU, не найденных при импорте
///
/// Список `pending` приходит от клиента (unresolvedSkus последнего импорта),
/// сервер между запросами ничего не хранит.
pub struct RemediationExecutor<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> RemediationExecutor<'a, S>
where
    S: CatalogStore + ?Sized,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Родительские товары, к которым можно привязать новый SKU
    pub async fn list_targets(&self) -> anyhow::Result<Vec<ParentProduct>> {
        self.store.list_parent_products().await
    }

    pub async fn register(
        &self,
        request: RegisterSkuRequest,
    ) -> Result<RegisterSkuResponse, RemediationError> {
        let variation = Variation::new(&request.sku, &request.name, &request.parent_id);

        if variation.name.is_empty() {
            return Err(RemediationError::Validation(
                "Variation name is required".into(),
            ));
        }
        if !request.pending.iter().any(|s| s.trim() == variation.sku) {
            return Err(RemediationError::NotPending(variation.sku));
        }

        let parent_id = variation.parent_ref().unwrap_or_default().to_string();
        if self.store.get_parent_product_by_id(&parent_id).await?.is_none() {
            return Err(RemediationError::UnknownParentProduct(parent_id));
        }

        // The pending list may be stale: re-check right before the write
        if self.store.get_variation_by_sku(&variation.sku).await?.is_some() {
            return Err(RemediationError::DuplicateSku(variation.sku));
        }
        self.store.insert_variation(&variation).await?;

        tracing::info!(
            "{}: registered SKU {} under parent product {}",
            RegisterMissingSku::full_name(),
            variation.sku,
            parent_id
        );

        let remaining = request
            .pending
            .into_iter()
            .filter(|s| s.trim() != variation.sku)
            .collect();
        Ok(RegisterSkuResponse {
            sku: variation.sku,
            remaining,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::ImportConfig;
    use crate::shared::data::store::memory::MemoryStore;
    use crate::usecases::u501_import_sales::ImportExecutor;
    use contracts::usecases::u501_import_sales::ImportSalesRequest;
    use rust_decimal::Decimal;

    fn store() -> MemoryStore {
        MemoryStore::with_catalog(
            vec![ParentProduct {
                parent_id: "P1".into(),
                name: "Kit".into(),
                unit_cost: Decimal::from(10),
                kit_quantity: 2,
                supplies_cost: Decimal::from(5),
                category_id: None,
            }],
            vec![Variation::new("SKU-A", "A", "P1")],
        )
    }

    fn request(sku: &str, parent: &str) -> RegisterSkuRequest {
        RegisterSkuRequest {
            pending: vec!["SKU-B".into(), "SKU-C".into()],
            sku: sku.into(),
            name: "Nova variação".into(),
            parent_id: parent.into(),
        }
    }

    #[tokio::test]
    async fn registers_and_shrinks_pending() {
        let store = store();
        let response = RemediationExecutor::new(&store)
            .register(request(" SKU-B ", "P1"))
            .await
            .unwrap();
        assert_eq!(response.sku, "SKU-B");
        assert_eq!(response.remaining, vec!["SKU-C"]);
        assert!(store.get_variation_by_sku("SKU-B").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn rejects_bad_requests_in_order() {
        let store = store();
        let executor = RemediationExecutor::new(&store);

        let mut blank = request("SKU-B", "P9");
        blank.name = "  ".into();
        assert!(matches!(
            executor.register(blank).await,
            Err(RemediationError::Validation(_))
        ));
        assert!(matches!(
            executor.register(request("SKU-Z", "P9")).await,
            Err(RemediationError::NotPending(_))
        ));
        assert!(matches!(
            executor.register(request("SKU-B", "P9")).await,
            Err(RemediationError::UnknownParentProduct(_))
        ));
        assert_eq!(store.variations.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn stale_pending_entry_is_duplicate() {
        let store = store();
        let mut req = request("SKU-A", "P1");
        req.pending.push("SKU-A".into());
        match RemediationExecutor::new(&store).register(req).await {
            Err(RemediationError::DuplicateSku(sku)) => assert_eq!(sku, "SKU-A"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn remediation_then_reimport_recovers_the_row() {
        let store = store();
        let settings = ImportConfig::default();
        let importer = ImportExecutor::new(&store, &settings);
        let file = "ID do pedido;Número de referência SKU;Quantidade;Preço acordado;Taxa de comissão;Taxa de serviço;Taxa de transação\n1;SKU-B;2;50;3;1;1\n";
        let req = || ImportSalesRequest {
            file_name: "vendas.csv".into(),
            platform: None,
        };

        let first = importer.execute(req(), file.as_bytes()).await.unwrap();
        assert_eq!(first.unresolved_skus, vec!["SKU-B"]);

        RemediationExecutor::new(&store)
            .register(RegisterSkuRequest {
                pending: first.unresolved_skus.clone(),
                sku: "SKU-B".into(),
                name: "B".into(),
                parent_id: "P1".into(),
            })
            .await
            .unwrap();

        let second = importer.execute(req(), file.as_bytes()).await.unwrap();
        assert_eq!(second.duplicates, 0);
        assert_eq!(second.inserted_lines, 1);
        assert!(second.unresolved_skus.is_empty());
        assert_eq!(store.ledger()[0].net_profit, Decimal::from(45));
    }

    #[tokio::test]
    async fn targets_are_parent_products() {
        let store = store();
        let targets = RemediationExecutor::new(&store).list_targets().await.unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].parent_id, "P1");
    }
}
