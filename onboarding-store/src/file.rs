use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use onboarding_api::{SessionStore, StorageError};

/// Session store writing one file per key under a root directory — the
/// local-storage equivalent for desktop deployments.
///
/// Writes go through a sibling temp file and a rename, so an interrupted
/// write never leaves a truncated blob behind; the previous blob stays
/// intact until the rename lands.
pub struct FileSessionStore {
    root: PathBuf,
}

impl FileSessionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Keys may contain separators (e.g. `onboarding/<uuid>`); flatten
    /// them into a single safe file name.
    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{file_name}.json"))
    }

    fn io_error(e: std::io::Error) -> StorageError {
        StorageError::Io(e.to_string())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, key: &str, blob: Vec<u8>) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).await.map_err(Self::io_error)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &blob).await.map_err(Self::io_error)?;
        fs::rename(&tmp, &path).await.map_err(Self::io_error)?;
        tracing::debug!(path = %path.display(), bytes = blob.len(), "session blob written");
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)).await {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::io_error(e)),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(e)),
        }
    }
}
