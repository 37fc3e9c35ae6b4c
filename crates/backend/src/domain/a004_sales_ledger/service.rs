use super::repository;
use contracts::domain::a004_sales_ledger::aggregate::LedgerEntry;
use contracts::enums::Platform;
use sea_orm::DatabaseConnection;

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<LedgerEntry>> {
    repository::list_all(db).await
}

pub async fn list_by_platform(
    db: &DatabaseConnection,
    platform: Platform,
) -> anyhow::Result<Vec<LedgerEntry>> {
    repository::list_by_platform(db, platform.code()).await
}
