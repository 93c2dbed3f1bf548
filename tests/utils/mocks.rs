use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use okey_scorekeeper::{InMemoryKeyValueStore, KeyValueStore, StorageError};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// In-memory store whose writes can be switched to fail
#[derive(Default)]
pub struct FlakyKeyValueStore {
    inner: InMemoryKeyValueStore,
    failing: AtomicBool,
}

impl FlakyKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("simulated write failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FlakyKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.inner.remove(key).await
    }
}
