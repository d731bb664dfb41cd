//! Store configuration and client construction

use std::str::FromStr;
use std::sync::Arc;

use super::errors::StorageError;
use super::types::{DataStore, PostgresDataStore, SqliteDataStore};

const DEFAULT_TABLE_PREFIX: &str = "reg_";

/// Connection settings for the backing store, read once at startup and
/// passed to [`crate::UserStore::connect`].
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Backend selector, `"sqlite"` or `"postgres"`.
    pub store_type: String,
    /// Connection URL in the backend's native format.
    pub url: String,
    /// Prefix prepended to every table name owned by this crate.
    pub table_prefix: String,
}

impl StoreConfig {
    /// Read the store settings from `REGISTRY_STORE_TYPE`,
    /// `REGISTRY_STORE_URL` and `REGISTRY_TABLE_PREFIX` (optional,
    /// defaults to `reg_`).
    pub fn from_env() -> Result<Self, StorageError> {
        let store_type = std::env::var("REGISTRY_STORE_TYPE")
            .map_err(|_| StorageError::Config("REGISTRY_STORE_TYPE must be set".to_string()))?;
        let url = std::env::var("REGISTRY_STORE_URL")
            .map_err(|_| StorageError::Config("REGISTRY_STORE_URL must be set".to_string()))?;
        let table_prefix = std::env::var("REGISTRY_TABLE_PREFIX")
            .unwrap_or_else(|_| DEFAULT_TABLE_PREFIX.to_string());

        Ok(Self {
            store_type,
            url,
            table_prefix,
        })
    }

    pub(crate) fn users_table(&self) -> String {
        format!("{}users", self.table_prefix)
    }
}

/// Build a lazily connecting pool for the configured backend. No connection
/// is attempted here, so failures show up on first use rather than at
/// construction.
pub(crate) fn connect(config: &StoreConfig) -> Result<Arc<dyn DataStore>, StorageError> {
    tracing::info!(
        "Initializing data store with type: {}, url: {}",
        config.store_type,
        config.url
    );

    let store = match config.store_type.as_str() {
        "sqlite" => {
            let opts = sqlx::sqlite::SqliteConnectOptions::from_str(&config.url)
                .map_err(|e| {
                    StorageError::Config(format!("Failed to parse SQLite connection string: {e}"))
                })?
                .create_if_missing(true);

            Arc::new(SqliteDataStore {
                pool: sqlx::sqlite::SqlitePool::connect_lazy_with(opts),
            }) as Arc<dyn DataStore>
        }
        "postgres" => Arc::new(PostgresDataStore {
            pool: sqlx::PgPool::connect_lazy(&config.url).map_err(|e| {
                StorageError::Config(format!("Failed to create Postgres pool: {e}"))
            })?,
        }) as Arc<dyn DataStore>,
        t => {
            return Err(StorageError::Config(format!(
                "Unsupported store type: {t}. Supported types are 'sqlite' and 'postgres'"
            )));
        }
    };

    Ok(store)
}
