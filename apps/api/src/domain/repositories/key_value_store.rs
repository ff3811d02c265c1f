use async_trait::async_trait;

use super::errors::RepositoryResult;

/// Durable string store addressed by well-known keys
///
/// The persistence boundary every repository is built on. Values are whole
/// JSON documents; there is no partial update and no cross-key transaction,
/// so concurrent writers to the same key resolve as last-write-wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> RepositoryResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn put(&self, key: &str, value: &str) -> RepositoryResult<()>;
}
