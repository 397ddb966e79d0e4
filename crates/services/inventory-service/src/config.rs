//! Inventory service configuration.

use std::env;

use common::DatabaseConfig;

/// Inventory service configuration.
#[derive(Debug, Clone, Default)]
pub struct InventoryServiceConfig {
    pub database: DatabaseConfig,
}

impl InventoryServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` wins when set; otherwise the URL is composed from
    /// `DATABASE_HOST`, `DATABASE_PORT`, `DATABASE_USER`, `DATABASE_PASSWORD`,
    /// `DATABASE_NAME` and `DATABASE_SSLMODE`.
    pub fn from_env() -> Self {
        let defaults = DatabaseConfig::default();

        let url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            DatabaseConfig::compose_url(
                &env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".to_string()),
                env::var("DATABASE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5432),
                &env::var("DATABASE_USER").unwrap_or_else(|_| "postgres".to_string()),
                &env::var("DATABASE_PASSWORD").unwrap_or_else(|_| "password".to_string()),
                &env::var("DATABASE_NAME").unwrap_or_else(|_| "inventory".to_string()),
                &env::var("DATABASE_SSLMODE").unwrap_or_else(|_| "disable".to_string()),
            )
        });

        Self {
            database: DatabaseConfig {
                url,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
        }
    }
}
