//! Application configuration loaded from environment variables.

use std::str::FromStr;

use signup_infra::{Argon2Config, DatabaseConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub hashing: Argon2Config,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parse(&lookup, "DB_MAX_CONNECTIONS").unwrap_or(20),
            min_connections: parse(&lookup, "DB_MIN_CONNECTIONS").unwrap_or(2),
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(&lookup, "PORT").unwrap_or(8080),
            database,
            hashing: Argon2Config {
                memory_kib: parse(&lookup, "HASH_MEMORY_KIB"),
                iterations: parse(&lookup, "HASH_ITERATIONS"),
                parallelism: parse(&lookup, "HASH_PARALLELISM"),
            },
        }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let value = lookup(key)?;
    let parsed = value.parse().ok();
    if parsed.is_none() {
        tracing::warn!(key, value = %value, "Ignoring unparsable configuration value");
    }
    parsed
}
