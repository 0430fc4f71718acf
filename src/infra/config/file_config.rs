use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, DatabaseConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub database: Option<FileDatabaseConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(database) = self.database {
            database.merge_into(&mut config.database);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDatabaseConfig {
    pub root: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileDatabaseConfig {
    fn merge_into(self, config: &mut DatabaseConfig) {
        if let Some(root) = self.root {
            config.root = root;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}
