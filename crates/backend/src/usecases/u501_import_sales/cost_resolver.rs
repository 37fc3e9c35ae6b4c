//! Себестоимость единицы проданного SKU
//!
//! SKU -> вариация -> родительский товар -> unitCost * kitQuantity + suppliesCost.
//! Отсутствие любого звена или переполнение суммы даёт `None`, а не ошибку.

use crate::shared::data::store::CatalogStore;
use contracts::domain::a002_parent_product::aggregate::ParentProduct;
use contracts::domain::a003_variation::aggregate::Variation;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Точечный поиск себестоимости через хранилище
pub async fn resolve_cost<S: CatalogStore + ?Sized>(
    store: &S,
    sku: &str,
) -> anyhow::Result<Option<Decimal>> {
    let sku = sku.trim();
    if sku.is_empty() {
        return Ok(None);
    }
    let Some(variation) = store.get_variation_by_sku(sku).await? else {
        return Ok(None);
    };
    let Some(parent_id) = variation.parent_ref() else {
        return Ok(None);
    };
    let parent = store.get_parent_product_by_id(parent_id).await?;
    Ok(parent.and_then(|p| p.total_kit_cost()))
}

/// Снимок каталога SKU -> себестоимость на время одного импорта
#[derive(Debug, Default, Clone)]
pub struct CostIndex {
    costs: HashMap<String, Decimal>,
}

impl CostIndex {
    pub async fn load<S: CatalogStore + ?Sized>(store: &S) -> anyhow::Result<Self> {
        let parents = store.list_parent_products().await?;
        let variations = store.list_variations().await?;
        let index = Self::from_catalog(&parents, &variations);
        tracing::info!(
            "Cost index built: {} SKUs from {} parent products",
            index.len(),
            parents.len()
        );
        Ok(index)
    }

    pub fn from_catalog(parents: &[ParentProduct], variations: &[Variation]) -> Self {
        let kit_costs: HashMap<&str, Decimal> = parents
            .iter()
            .filter_map(|p| Some((p.parent_id.as_str(), p.total_kit_cost()?)))
            .collect();

        let costs = variations
            .iter()
            .filter_map(|v| {
                let cost = kit_costs.get(v.parent_ref()?)?;
                Some((v.sku.trim().to_string(), *cost))
            })
            .collect();

        Self { costs }
    }

    pub fn resolve(&self, sku: &str) -> Option<Decimal> {
        self.costs.get(sku.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::store::memory::MemoryStore;

    fn parent(id: &str, unit: i64, kit: i32, supplies: i64) -> ParentProduct {
        ParentProduct {
            parent_id: id.into(),
            name: id.into(),
            unit_cost: Decimal::from(unit),
            kit_quantity: kit,
            supplies_cost: Decimal::from(supplies),
            category_id: None,
        }
    }

    fn store() -> MemoryStore {
        let mut orphan = Variation::new("SKU-ORPHAN", "Orphan", "");
        orphan.parent_id = None;
        let mut huge = parent("P2", 0, 2, 0);
        huge.unit_cost = Decimal::MAX;
        MemoryStore::with_catalog(
            vec![parent("P1", 10, 2, 5), huge],
            vec![
                Variation::new("SKU-A", "A", "P1"),
                Variation::new("SKU-HUGE", "Huge", "P2"),
                Variation::new("SKU-GONE", "Gone", "P404"),
                orphan,
            ],
        )
    }

    #[tokio::test]
    async fn point_lookup_follows_the_chain() {
        let store = store();
        assert_eq!(resolve_cost(&store, " SKU-A ").await.unwrap(), Some(Decimal::from(25)));
        assert_eq!(resolve_cost(&store, "SKU-X").await.unwrap(), None);
        assert_eq!(resolve_cost(&store, "SKU-GONE").await.unwrap(), None);
        assert_eq!(resolve_cost(&store, "SKU-ORPHAN").await.unwrap(), None);
        assert_eq!(resolve_cost(&store, "SKU-HUGE").await.unwrap(), None);
        assert_eq!(resolve_cost(&store, "").await.unwrap(), None);
    }

    #[tokio::test]
    async fn index_agrees_with_point_lookup() {
        let store = store();
        let index = CostIndex::load(&store).await.unwrap();
        assert_eq!(index.len(), 1);
        for sku in ["SKU-A", "SKU-X", "SKU-GONE", "SKU-ORPHAN", "SKU-HUGE"] {
            assert_eq!(index.resolve(sku), resolve_cost(&store, sku).await.unwrap(), "{sku}");
        }
    }
}
