use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::atlas::{CategoryPairing, CATEGORIES_API, SEARCH_API};

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    pub search_url: String,
    pub categories_url: String,
    pub client_id: String,
    pub user_agent: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    pub game_count: u32,
    pub category_pairing: CategoryPairing,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Optional filters applied to the stored catalog before it is printed.
#[derive(Debug, Default, Deserialize)]
pub struct QueryConfig {
    pub max_playtime: Option<i32>,
    pub category: Option<String>,
    pub min_players: Option<i32>,
    pub max_players: Option<i32>,
}

impl QueryConfig {
    /// The requested player range. A single bound is used for both ends.
    pub fn player_range(&self) -> Option<(i32, i32)> {
        match (self.min_players, self.max_players) {
            (Some(min), Some(max)) => Some((min, max)),
            (Some(n), None) | (None, Some(n)) => Some((n, n)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("RUN_ENV").unwrap_or_else(|_| "development".into());
        let config_file = environment_file(&environment);

        let s = Config::builder()
            .set_default("api.search_url", SEARCH_API)?
            .set_default("api.categories_url", CATEGORIES_API)?
            .set_default("api.client_id", "")?
            .set_default(
                "api.user_agent",
                concat!("boardgame-catalog/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("catalog.game_count", 100)?
            .set_default("catalog.category_pairing", "positional")?
            .set_default("logging.level", "info")?
            .add_source(File::with_name("config/default.yaml").required(false))
            .add_source(File::with_name(&format!("config/{}.yaml", config_file)).required(false))
            .add_source(File::with_name("config/local.yaml").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

/// Name of the per-environment overlay under `config/`.
fn environment_file(run_env: &str) -> &'static str {
    match run_env {
        "production" => "prod",
        _ => "dev",
    }
}
