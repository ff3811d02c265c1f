use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::roster::RosterState;

/// Repository for the roster document
///
/// The roster store never persists on its own; callers save after every
/// successful mutation.
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// Load the persisted roster
    ///
    /// Never fails: a missing, unreadable, malformed or inconsistent record
    /// yields the empty state.
    async fn load(&self) -> RosterState;

    /// Replace the persisted roster with `state`
    async fn save(&self, state: &RosterState) -> RepositoryResult<()>;
}
