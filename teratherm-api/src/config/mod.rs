use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct TerathermConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MongoDB connection string. `None` runs the service without a database.
    pub url: Option<String>,
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: default_database_name(),
        }
    }
}

fn default_database_name() -> String {
    "teratherm".to_string()
}

impl TerathermConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(TerathermConfig {
            common,
            database: DatabaseConfig {
                url: non_empty_env("DATABASE_URL"),
                name: non_empty_env("DATABASE_NAME").unwrap_or_else(default_database_name),
            },
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
