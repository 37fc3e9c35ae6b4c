pub mod repository;

use repository::log_event_internal;
use sea_orm::DatabaseConnection;

/// Логирование события на сервере в таблицу system_log
///
/// # Примеры
/// ```ignore
/// logger::log(&conn, "startup", "Сервер запущен");
/// logger::log(&conn, "import", "3 novos pedidos ...");
/// ```
pub fn log(conn: &DatabaseConnection, category: &str, message: &str) {
    log_event_internal(conn.clone(), "server", category, message);
}
