use std::{collections::HashMap, env, path::PathBuf};

use chefbuddy_recipe::{DEFAULT_BROWSE_LIMIT, DEFAULT_RECOMMEND_LIMIT, DietaryKeywords};
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pantry: PantryConfig,
    #[serde(default)]
    pub recipes: RecipesConfig,
    /// Replaces the built-in dietary keyword lists when present.
    #[serde(default)]
    pub dietary_keywords: Option<DietaryKeywords>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            token: None,
        }
    }
}

fn default_api_base_url() -> String {
    chefbuddy_client::DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PantryConfig {
    #[serde(default = "default_alert_days")]
    pub alert_days: i64,
    /// Shelf life in days per category; merged over the built-in table.
    #[serde(default)]
    pub shelf_life: HashMap<String, i64>,
    #[serde(default)]
    pub fallback_days: Option<i64>,
}

impl Default for PantryConfig {
    fn default() -> Self {
        Self {
            alert_days: default_alert_days(),
            shelf_life: HashMap::new(),
            fallback_days: None,
        }
    }
}

fn default_alert_days() -> i64 {
    chefbuddy_pantry::DEFAULT_ALERT_DAYS
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipesConfig {
    /// JSON catalog file. The bundled sample catalog is used when unset.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default = "default_browse_limit")]
    pub browse_limit: usize,
    #[serde(default = "default_recommend_limit")]
    pub recommend_limit: usize,
}

impl Default for RecipesConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            browse_limit: default_browse_limit(),
            recommend_limit: default_recommend_limit(),
        }
    }
}

fn default_browse_limit() -> usize {
    DEFAULT_BROWSE_LIMIT
}

fn default_recommend_limit() -> usize {
    DEFAULT_RECOMMEND_LIMIT
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CHEFBUDDY__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("database.url", "sqlite:chefbuddy.db")?
            .set_default("database.max_connections", 5)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional; a missing file leaves the defaults in place.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CHEFBUDDY")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.database.url.trim().is_empty() {
            return Err("Database url must not be empty".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.pantry.alert_days < 0 {
            return Err("Pantry alert_days must not be negative".to_string());
        }
        if let Some((category, days)) = self.pantry.shelf_life.iter().find(|(_, days)| **days <= 0)
        {
            return Err(format!(
                "Shelf life for {category} must be positive, got {days}"
            ));
        }
        if self.pantry.fallback_days.is_some_and(|days| days <= 0) {
            return Err("Pantry fallback_days must be positive".to_string());
        }
        if self.recipes.browse_limit == 0 || self.recipes.recommend_limit == 0 {
            return Err("Recipe limits must be at least 1".to_string());
        }
        Ok(())
    }
}
