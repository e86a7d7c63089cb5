//! Directory-backed store: one file per key.

use super::KeyValueStore;
use crate::error::StorageError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stores each key as a file under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the platform data directory (`~/.local/share/emoji-selector`).
    pub fn default_location() -> Result<Self, StorageError> {
        dirs::data_dir()
            .map(|d| Self::new(d.join("emoji-selector")))
            .ok_or(StorageError::NoDirFound)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a key. Characters unsafe in file names become `_`.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", name))
    }
}

impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "No stored value");
                Ok(None)
            }
            Err(source) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        let write_failed = |source| StorageError::WriteFailed {
            key: key.to_string(),
            source,
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(write_failed)?;

        let path = self.path_for(key);
        tokio::fs::write(&path, value).await.map_err(write_failed)?;
        debug!(?path, "Stored value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_sanitizes_key() {
        let store = FileStore::new("/tmp/store");
        assert_eq!(
            store.path_for("@react-native-emoji-selector:HISTORY"),
            PathBuf::from("/tmp/store/_react-native-emoji-selector_HISTORY.json")
        );
    }

    #[tokio::test]
    async fn test_roundtrip_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::new(tmp.path().join("nested"));

        assert_eq!(store.get_item("key").await.unwrap(), None);
        store.set_item("key", "[]".to_string()).await.unwrap();
        assert_eq!(store.get_item("key").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_write_into_file_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a dir").unwrap();

        let store = FileStore::new(&blocker);
        let result = store.set_item("key", "[]".to_string()).await;
        assert!(matches!(result, Err(StorageError::WriteFailed { .. })));
    }
}
