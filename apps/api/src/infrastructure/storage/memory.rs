use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::repositories::{KeyValueStore, RepositoryError, RepositoryResult};

/// In-memory implementation of KeyValueStore
///
/// Used when no data directory is configured, and by tests. Contents are
/// lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
