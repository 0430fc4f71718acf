use std::path::Path;

use crate::{
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError,
        storage_layout::StorageLayout,
    },
    store::json_store::JsonFileStore,
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;

    let document_path = match &config.database.file {
        Some(path) => path.clone(),
        None => {
            let layout = StorageLayout::resolve()?;
            layout.ensure_dirs()?;
            layout.history_file()
        }
    };

    let store = JsonFileStore::new(document_path, &config.database.root);

    Ok(AppContext::new(config, store))
}
