use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::repositories::{KeyValueStore, RepositoryError, RepositoryResult};

/// File-based implementation of KeyValueStore
///
/// Each key is stored as `<data_dir>/<key>.json`. Writes go to a sibling
/// `.tmp` file that is then renamed over the target, so a crash mid-write
/// leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a new file store, creating `base_dir` if needed
    pub fn new(base_dir: impl AsRef<Path>) -> RepositoryResult<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Keys become file names, so only `[A-Za-z0-9_-]` is accepted
    fn key_path(&self, key: &str) -> RepositoryResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(RepositoryError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        let path = self.key_path(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RepositoryError::Io(e)),
        }
    }

    async fn put(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let path = self.key_path(key)?;
        let temp_path = path.with_extension("json.tmp");

        tokio::fs::write(&temp_path, value).await?;
        tokio::fs::rename(&temp_path, &path).await?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "Stored value");

        Ok(())
    }
}
