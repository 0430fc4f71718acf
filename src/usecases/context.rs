use crate::{infra::config::AppConfig, store::json_store::JsonFileStore};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: JsonFileStore,
}

impl AppContext {
    pub fn new(config: AppConfig, store: JsonFileStore) -> Self {
        Self { config, store }
    }
}
