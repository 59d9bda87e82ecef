use async_trait::async_trait;
use sqlx::{AnyPool, Row, any::AnyPoolOptions};

use crate::{
    domain::errors::{ConfigError, ConfigResult},
    ports::ConfigStore,
};

/// SQL-based implementation of ConfigStore (PostgreSQL or SQLite)
///
/// Values live in a `config(cat, k, v)` table, one row per namespace/key pair.
#[derive(Clone)]
pub struct SqlConfigStore {
    pool: AnyPool,
}

impl SqlConfigStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url`, e.g. `postgres://...` or `sqlite://config.db?mode=rwc`
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        sqlx::any::install_default_drivers();
        // A single connection keeps `sqlite::memory:` databases shared
        let max_connections = if database_url.starts_with("sqlite") { 1 } else { 5 };
        let pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Initialize database tables
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS config (
                cat VARCHAR(50) NOT NULL,
                k VARCHAR(50) NOT NULL,
                v TEXT NOT NULL,
                PRIMARY KEY (cat, k)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl ConfigStore for SqlConfigStore {
    async fn get(&self, namespace: &str, key: &str, default: &str) -> ConfigResult<String> {
        let row = sqlx::query("SELECT v FROM config WHERE cat = $1 AND k = $2")
            .bind(namespace)
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ConfigError::read(namespace, key, e))?;

        match row {
            Some(row) => row
                .try_get::<String, _>("v")
                .map_err(|e| ConfigError::read(namespace, key, e)),
            None => Ok(default.to_string()),
        }
    }

    async fn set(&self, namespace: &str, key: &str, value: &str) -> ConfigResult<()> {
        sqlx::query(
            r#"
            INSERT INTO config (cat, k, v)
            VALUES ($1, $2, $3)
            ON CONFLICT (cat, k)
            DO UPDATE SET v = EXCLUDED.v
            "#,
        )
        .bind(namespace)
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| ConfigError::write(namespace, key, e))?;

        Ok(())
    }
}
