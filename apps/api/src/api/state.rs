use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::errors::ApiError;
use crate::config::{AppConfig, AuthSettings};
use crate::domain::repositories::{
    KeyValueStore, RepositoryResult, RosterRepository, UserRepository,
};
use crate::domain::roster::RosterStore;
use crate::infrastructure::repositories::{KvRosterRepository, KvUserRepository};
use crate::infrastructure::storage::{FileKeyValueStore, InMemoryKeyValueStore};

/// Shared state handed to every handler
///
/// The roster store sits behind one async mutex. A handler keeps the guard
/// across both the mutation and its write-through save, so requests are
/// applied and persisted one at a time in the same order.
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<Mutex<RosterStore>>,
    pub rosters: Arc<dyn RosterRepository>,
    pub users: Arc<dyn UserRepository>,
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    /// Builds state over the given repositories, loading the stored roster
    pub async fn load(
        rosters: Arc<dyn RosterRepository>,
        users: Arc<dyn UserRepository>,
        auth: AuthSettings,
    ) -> Self {
        let state = rosters.load().await;
        // `load` only returns consistent state, so this fallback is not expected to run
        let store = RosterStore::from_state(state).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Stored roster rejected, starting empty");
            RosterStore::new()
        });

        Self {
            roster: Arc::new(Mutex::new(store)),
            rosters,
            users,
            auth: Arc::new(auth),
        }
    }

    /// Builds state over one key-value store
    pub async fn with_store(store: Arc<dyn KeyValueStore>, auth: AuthSettings) -> Self {
        let rosters = Arc::new(KvRosterRepository::new(store.clone()));
        let users = Arc::new(KvUserRepository::new(store));
        Self::load(rosters, users, auth).await
    }

    /// Builds state from configuration: file storage if `data_dir` is set,
    /// memory otherwise
    pub async fn from_config(config: &AppConfig) -> RepositoryResult<Self> {
        let store: Arc<dyn KeyValueStore> = match &config.data_dir {
            Some(dir) => {
                tracing::info!(data_dir = %dir.display(), "Using file storage");
                Arc::new(FileKeyValueStore::new(dir)?)
            }
            None => Arc::new(InMemoryKeyValueStore::new()),
        };

        Ok(Self::with_store(store, config.auth.clone()).await)
    }

    /// Runs a roster mutation with write-through save
    ///
    /// `op` works on a copy of the store. The copy replaces `roster` only
    /// after its events are drained and the snapshot is saved, so an `op`
    /// error or a failed save leaves `roster` as it was last persisted.
    pub async fn apply<T, F>(&self, roster: &mut RosterStore, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut RosterStore) -> Result<T, ApiError>,
    {
        let mut draft = roster.clone();
        let value = op(&mut draft)?;

        let events = draft.drain_events();
        if events.is_empty() {
            return Ok(value);
        }

        if let Err(e) = self.rosters.save(&draft.snapshot()).await {
            tracing::error!(error = %e, discarded_events = events.len(), "Failed to save roster");
            return Err(ApiError::internal_server_error(format!(
                "Failed to save teams: {}",
                e
            )));
        }

        *roster = draft;
        for event in &events {
            tracing::info!(event = event.kind(), team_id = %event.team_id(), ?event, "Roster changed");
        }

        Ok(value)
    }
}
