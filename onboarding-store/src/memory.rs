use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use onboarding_api::{SessionStore, StorageError};

/// Session store backed by a process-local map.
///
/// Intended for tests and demos; nothing survives process exit.
#[derive(Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, key: &str, blob: Vec<u8>) -> Result<(), StorageError> {
        self.entries.write().insert(key.to_string(), blob);
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().remove(key);
        Ok(())
    }
}
