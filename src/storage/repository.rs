use async_trait::async_trait;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::StorageError;

/// Asynchronous string key-value store backing the engine's persisted state
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory implementation of KeyValueStore for development and testing
///
/// Values live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a store with pre-populated entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn contains_key(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().await;
        let value = entries.get(key).cloned();
        debug!(key, found = value.is_some(), "Read key from memory");
        Ok(value)
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        debug!(key, bytes = value.len(), "Stored key in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_none() {
            debug!(key, "Key to remove was not present in memory");
        }
        Ok(())
    }
}

/// PostgreSQL implementation of KeyValueStore
pub struct PostgresKeyValueStore {
    pool: PgPool,
}

impl PostgresKeyValueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the backing table when it does not exist yet
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query("CREATE TABLE IF NOT EXISTS okey_kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create key-value table");
                StorageError::Backend(e.to_string())
            })?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for PostgresKeyValueStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM okey_kv WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, key, "Failed to read key from database");
                StorageError::Backend(e.to_string())
            })?;

        Ok(row.map(|row| row.get("value")))
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO okey_kv (key, value) VALUES ($1, $2) ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, key, "Failed to write key to database");
            StorageError::Backend(e.to_string())
        })?;

        debug!(key, "Stored key in database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM okey_kv WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, key, "Failed to remove key from database");
                StorageError::Backend(e.to_string())
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let store = InMemoryKeyValueStore::new();
        store.set("game", "{}").await.unwrap();

        assert_eq!(store.get("game").await.unwrap().as_deref(), Some("{}"));
        assert_eq!(store.entry_count().await, 1);
    }

    #[tokio::test]
    async fn set_overwrites_existing_value() {
        let store = InMemoryKeyValueStore::with_entries([("language", "ku")]);
        store.set("language", "en").await.unwrap();

        assert_eq!(store.get("language").await.unwrap().as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn get_missing_key_returns_none() {
        let store = InMemoryKeyValueStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = InMemoryKeyValueStore::with_entries([("settings", "{}")]);

        store.remove("settings").await.unwrap();
        store.remove("settings").await.unwrap();

        assert!(!store.contains_key("settings").await);
    }
}
