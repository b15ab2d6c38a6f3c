use async_trait::async_trait;

use crate::error::StorageError;

/// Key-value persistence contract for onboarding sessions.
///
/// One serialized blob per session key; the controller is the only writer
/// for a given key, so implementations do not need any cross-key
/// coordination. `load` returning `Ok(None)` signals "no prior session"
/// and must not be treated as an error.
///
/// # Example
/// ```ignore
/// let store = InMemorySessionStore::new();
/// store.save("onboarding/abc", blob).await?;
/// let restored = store.load("onboarding/abc").await?;
/// ```
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Durably write the blob under `key`, replacing any previous value.
    async fn save(&self, key: &str, blob: Vec<u8>) -> Result<(), StorageError>;

    /// Read the blob stored under `key`, or `None` when nothing was saved.
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Remove the blob stored under `key`. Removing an absent key is not
    /// an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}
