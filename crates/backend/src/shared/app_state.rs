use super::config::Config;
use super::data::store::SqliteStore;
use std::sync::Arc;

/// Состояние, общее для всех хендлеров
#[derive(Clone)]
pub struct AppState {
    pub store: SqliteStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: SqliteStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
