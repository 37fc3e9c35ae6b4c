//! Store seam between the import/remediation use cases and persistence.
//!
//! Use cases depend on the traits only; `SqliteStore` is the production
//! implementation over a single injected connection.

use crate::domain::a002_parent_product::repository as parent_repository;
use crate::domain::a003_variation::repository as variation_repository;
use crate::domain::a004_sales_ledger::repository as ledger_repository;
use async_trait::async_trait;
use contracts::domain::a002_parent_product::aggregate::ParentProduct;
use contracts::domain::a003_variation::aggregate::Variation;
use contracts::domain::a004_sales_ledger::aggregate::LedgerEntry;
use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreWriteError {
    #[error("SKU '{0}' already exists")]
    DuplicateSku(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_parent_products(&self) -> anyhow::Result<Vec<ParentProduct>>;
    async fn list_variations(&self) -> anyhow::Result<Vec<Variation>>;
    async fn get_variation_by_sku(&self, sku: &str) -> anyhow::Result<Option<Variation>>;
    async fn get_parent_product_by_id(&self, parent_id: &str)
        -> anyhow::Result<Option<ParentProduct>>;
    async fn insert_variation(&self, variation: &Variation) -> Result<(), StoreWriteError>;
}

#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn list_existing_order_ids(&self) -> anyhow::Result<HashSet<String>>;
    /// All-or-nothing: either every entry is written or none is
    async fn bulk_insert(&self, entries: &[LedgerEntry]) -> anyhow::Result<usize>;
}

#[derive(Clone)]
pub struct SqliteStore {
    conn: DatabaseConnection,
}

impl SqliteStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}

#[async_trait]
impl CatalogStore for SqliteStore {
    async fn list_parent_products(&self) -> anyhow::Result<Vec<ParentProduct>> {
        parent_repository::list_all(&self.conn).await
    }

    async fn list_variations(&self) -> anyhow::Result<Vec<Variation>> {
        variation_repository::list_all(&self.conn).await
    }

    async fn get_variation_by_sku(&self, sku: &str) -> anyhow::Result<Option<Variation>> {
        variation_repository::get_by_sku(&self.conn, sku).await
    }

    async fn get_parent_product_by_id(
        &self,
        parent_id: &str,
    ) -> anyhow::Result<Option<ParentProduct>> {
        parent_repository::get_by_id(&self.conn, parent_id).await
    }

    async fn insert_variation(&self, variation: &Variation) -> Result<(), StoreWriteError> {
        variation_repository::insert(&self.conn, variation)
            .await
            .map_err(|e| {
                if variation_repository::is_unique_violation(&e) {
                    StoreWriteError::DuplicateSku(variation.sku.clone())
                } else {
                    StoreWriteError::Other(e)
                }
            })
    }
}

#[async_trait]
impl LedgerStore for SqliteStore {
    async fn list_existing_order_ids(&self) -> anyhow::Result<HashSet<String>> {
        ledger_repository::list_order_ids(&self.conn).await
    }

    async fn bulk_insert(&self, entries: &[LedgerEntry]) -> anyhow::Result<usize> {
        if entries.is_empty() {
            return Ok(0);
        }
        let txn = self.conn.begin().await?;
        // Dropping an uncommitted transaction rolls it back
        let inserted = ledger_repository::insert_many(&txn, entries).await?;
        txn.commit().await?;
        Ok(inserted)
    }
}
