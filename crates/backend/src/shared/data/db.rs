use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_parent_product::aggregate::ParentProduct;
use contracts::domain::a003_variation::aggregate::Variation;
use contracts::domain::a004_sales_ledger::aggregate::LedgerEntry;
use contracts::domain::common::AggregateRoot;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

/// Открыть (создать при отсутствии) файл БД и привести схему к актуальной
pub async fn initialize_database(db_path: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_path.is_absolute() {
        db_path.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_path)
    };

    let conn = Database::connect(&build_sqlite_url(&absolute_path)).await?;
    bootstrap_schema(&conn).await?;
    tracing::info!("Database ready at {}", absolute_path.display());
    Ok(conn)
}

pub fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

const CREATE_CATEGORY_TABLE: &str = r#"
    CREATE TABLE a001_category (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    );
"#;

const CREATE_PARENT_PRODUCT_TABLE: &str = r#"
    CREATE TABLE a002_parent_product (
        parent_id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        unit_cost TEXT NOT NULL DEFAULT '0',
        kit_quantity INTEGER NOT NULL DEFAULT 1,
        supplies_cost TEXT NOT NULL DEFAULT '0',
        category_id INTEGER
    );
"#;

const CREATE_VARIATION_TABLE: &str = r#"
    CREATE TABLE a003_variation (
        sku TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        parent_id TEXT
    );
"#;

const CREATE_SALES_LEDGER_TABLE: &str = r#"
    CREATE TABLE a004_sales_ledger (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        order_id TEXT NOT NULL,
        order_date TEXT NOT NULL DEFAULT '',
        platform TEXT NOT NULL DEFAULT 'other',
        sku TEXT NOT NULL,
        quantity INTEGER NOT NULL,
        gross_revenue_per_unit TEXT NOT NULL DEFAULT '0',
        total_coupons TEXT NOT NULL DEFAULT '0',
        marketplace_fees TEXT NOT NULL DEFAULT '0',
        shipping_cost TEXT NOT NULL DEFAULT '0',
        net_sale_value TEXT NOT NULL DEFAULT '0',
        computed_cost TEXT NOT NULL DEFAULT '0',
        net_profit TEXT NOT NULL DEFAULT '0',
        imported_at TEXT NOT NULL DEFAULT ''
    );
"#;

const CREATE_SYSTEM_LOG_TABLE: &str = r#"
    CREATE TABLE system_log (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        timestamp TEXT NOT NULL,
        source TEXT NOT NULL,
        category TEXT NOT NULL,
        message TEXT NOT NULL
    );
"#;

/// Минимальный bootstrap схемы: создать недостающие таблицы, индексы и колонки
pub async fn bootstrap_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    ensure_table(conn, &Category::full_name(), CREATE_CATEGORY_TABLE).await?;
    ensure_table(conn, &ParentProduct::full_name(), CREATE_PARENT_PRODUCT_TABLE).await?;
    ensure_table(conn, &Variation::full_name(), CREATE_VARIATION_TABLE).await?;
    ensure_table(conn, &LedgerEntry::full_name(), CREATE_SALES_LEDGER_TABLE).await?;
    ensure_table(conn, "system_log", CREATE_SYSTEM_LOG_TABLE).await?;

    let ledger = LedgerEntry::full_name();
    // Ledgers created before multi-platform support lack these columns
    ensure_column(
        conn,
        &ledger,
        "platform",
        "ALTER TABLE a004_sales_ledger ADD COLUMN platform TEXT NOT NULL DEFAULT 'other';",
    )
    .await?;
    ensure_column(
        conn,
        &ledger,
        "shipping_cost",
        "ALTER TABLE a004_sales_ledger ADD COLUMN shipping_cost TEXT NOT NULL DEFAULT '0';",
    )
    .await?;

    execute(
        conn,
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_a004_sales_ledger_order_id ON a004_sales_ledger (order_id);",
    )
    .await?;
    execute(
        conn,
        "CREATE INDEX IF NOT EXISTS idx_a003_variation_parent_id ON a003_variation (parent_id);",
    )
    .await?;

    Ok(())
}

async fn execute<C: ConnectionTrait>(conn: &C, sql: &str) -> anyhow::Result<()> {
    conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
        .await?;
    Ok(())
}

pub async fn table_exists<C: ConnectionTrait>(conn: &C, table: &str) -> anyhow::Result<bool> {
    let check = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        table
    );
    let rows = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
        .await?;
    Ok(!rows.is_empty())
}

async fn ensure_table<C: ConnectionTrait>(
    conn: &C,
    table: &str,
    create_sql: &str,
) -> anyhow::Result<()> {
    if !table_exists(conn, table).await? {
        tracing::info!("Creating {} table", table);
        execute(conn, create_sql).await?;
    }
    Ok(())
}

async fn ensure_column<C: ConnectionTrait>(
    conn: &C,
    table: &str,
    column: &str,
    alter_sql: &str,
) -> anyhow::Result<()> {
    let pragma = format!("PRAGMA table_info('{}');", table);
    let cols = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, pragma))
        .await?;
    let has_column = cols.iter().any(|row| {
        let name: String = row.try_get("", "name").unwrap_or_default();
        name == column
    });
    if !has_column {
        tracing::info!("Adding column {}.{}", table, column);
        execute(conn, alter_sql).await?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_url_forms() {
        assert_eq!(
            build_sqlite_url(Path::new("/tmp/app.db")),
            "sqlite:///tmp/app.db?mode=rwc"
        );
        assert_eq!(
            build_sqlite_url(Path::new("C:\\data\\app.db")),
            "sqlite:///C:/data/app.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn bootstrap_is_repeatable() {
        let (_dir, store) = test_support::temp_store().await;
        let conn = store.connection();
        bootstrap_schema(conn).await.unwrap();
        for table in [
            "a001_category",
            "a002_parent_product",
            "a003_variation",
            "a004_sales_ledger",
            "system_log",
        ] {
            assert!(table_exists(conn, table).await.unwrap(), "{table}");
        }
    }

    #[tokio::test]
    async fn legacy_ledger_gets_new_columns() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("legacy.db");
        let conn = Database::connect(&build_sqlite_url(&path)).await.unwrap();
        execute(
            &conn,
            "CREATE TABLE a004_sales_ledger (id INTEGER PRIMARY KEY AUTOINCREMENT, order_id TEXT NOT NULL, order_date TEXT NOT NULL DEFAULT '', sku TEXT NOT NULL, quantity INTEGER NOT NULL, gross_revenue_per_unit TEXT NOT NULL DEFAULT '0', total_coupons TEXT NOT NULL DEFAULT '0', marketplace_fees TEXT NOT NULL DEFAULT '0', net_sale_value TEXT NOT NULL DEFAULT '0', computed_cost TEXT NOT NULL DEFAULT '0', net_profit TEXT NOT NULL DEFAULT '0', imported_at TEXT NOT NULL DEFAULT '');",
        )
        .await
        .unwrap();

        bootstrap_schema(&conn).await.unwrap();

        let cols = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "PRAGMA table_info('a004_sales_ledger');".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = cols
            .iter()
            .map(|r| r.try_get::<String>("", "name").unwrap())
            .collect();
        assert!(names.contains(&"platform".to_string()));
        assert!(names.contains(&"shipping_cost".to_string()));
    }
}
