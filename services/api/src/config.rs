use std::time::Duration;

use serde::Deserialize;

use nikufam_core::config::Config;

/// API service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Redis connection URL (default `redis://localhost:6379`). Env var: `REDIS_URL`.
    #[serde(default = "default_redis_url")]
    pub redis_url: String,
    /// TCP port to listen on (default 3000). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound for a single Postgres or Redis call, in milliseconds (default 2000).
    /// Env var: `STORE_TIMEOUT_MS`.
    #[serde(default = "default_store_timeout_ms")]
    pub store_timeout_ms: u64,
    /// Postgres pool size (default 10). Env var: `DATABASE_MAX_CONNECTIONS`.
    #[serde(default = "default_database_max_connections")]
    pub database_max_connections: u32,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_owned()
}

fn default_port() -> u16 {
    3000
}

fn default_store_timeout_ms() -> u64 {
    2000
}

fn default_database_max_connections() -> u32 {
    10
}

impl Config for ApiConfig {}

impl ApiConfig {
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}
