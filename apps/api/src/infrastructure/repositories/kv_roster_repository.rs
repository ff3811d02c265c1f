use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::repositories::{KeyValueStore, RepositoryResult, RosterRepository};
use crate::domain::roster::RosterState;

/// Well-known key of the roster document
pub const ROSTER_KEY: &str = "teams";

/// KeyValueStore implementation of RosterRepository
///
/// Stores the whole `RosterState` as one JSON document under `ROSTER_KEY`.
pub struct KvRosterRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvRosterRepository {
    /// Creates a new KvRosterRepository
    ///
    /// # Arguments
    /// * `store` - Backing key-value store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RosterRepository for KvRosterRepository {
    async fn load(&self) -> RosterState {
        let raw = match self.store.get(ROSTER_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored roster, starting empty");
                return RosterState::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored roster, starting empty");
                return RosterState::default();
            }
        };

        let state: RosterState = match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, "Stored roster is malformed, starting empty");
                return RosterState::default();
            }
        };

        if let Err(e) = state.owner_index() {
            tracing::warn!(error = %e, "Stored roster is inconsistent, starting empty");
            return RosterState::default();
        }

        tracing::info!(teams = state.teams.len(), "Loaded stored roster");
        state
    }

    async fn save(&self, state: &RosterState) -> RepositoryResult<()> {
        let raw = serde_json::to_string(state)?;
        self.store.put(ROSTER_KEY, &raw).await?;

        tracing::debug!(teams = state.teams.len(), "Saved roster");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::{NbaTeam, Player, PlayerId};
    use crate::domain::roster::RosterStore;
    use crate::infrastructure::storage::InMemoryKeyValueStore;
    use uuid::Uuid;

    fn player(id: u64) -> Player {
        Player::new(
            PlayerId::new(id),
            "Tim",
            "Duncan",
            "F-C",
            NbaTeam {
                id: 27,
                name: "Spurs".to_string(),
                full_name: "San Antonio Spurs".to_string(),
                abbreviation: "SAS".to_string(),
            },
        )
    }

    fn setup() -> (Arc<InMemoryKeyValueStore>, KvRosterRepository) {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        let repo = KvRosterRepository::new(kv.clone());
        (kv, repo)
    }

    #[tokio::test]
    async fn load_absent_record_is_empty() {
        let (_, repo) = setup();
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let (_, repo) = setup();
        let mut store = RosterStore::new();
        store
            .create_team("Twin Towers", vec![player(21), player(50)], Uuid::new_v4())
            .unwrap();

        repo.save(&store.snapshot()).await.unwrap();
        let loaded = repo.load().await;

        assert_eq!(loaded, store.snapshot());
    }

    #[tokio::test]
    async fn save_of_loaded_state_is_noop() {
        let (kv, repo) = setup();
        let mut store = RosterStore::new();
        store.create_team("A", vec![player(1)], Uuid::new_v4()).unwrap();
        repo.save(&store.snapshot()).await.unwrap();
        let before = kv.get(ROSTER_KEY).await.unwrap();

        let loaded = repo.load().await;
        repo.save(&loaded).await.unwrap();

        assert_eq!(kv.get(ROSTER_KEY).await.unwrap(), before);
    }

    #[tokio::test]
    async fn load_malformed_record_is_empty() {
        let (kv, repo) = setup();
        kv.put(ROSTER_KEY, "{not json").await.unwrap();

        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn load_wrong_shape_is_empty() {
        let (kv, repo) = setup();
        kv.put(ROSTER_KEY, r#"{"teams":[{"id":"not-a-uuid"}]}"#)
            .await
            .unwrap();

        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn load_inconsistent_record_is_empty() {
        let (kv, repo) = setup();
        let mut first = RosterStore::new();
        first.create_team("A", vec![player(1)], Uuid::new_v4()).unwrap();
        let mut second = RosterStore::new();
        second.create_team("B", vec![player(1)], Uuid::new_v4()).unwrap();

        let mut state = first.snapshot();
        state.teams.extend(second.snapshot().teams);
        kv.put(ROSTER_KEY, &serde_json::to_string(&state).unwrap())
            .await
            .unwrap();

        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn stored_document_uses_expected_field_names() {
        let (kv, repo) = setup();
        let mut store = RosterStore::new();
        let owner = Uuid::new_v4();
        store.create_team("Doc", vec![player(3)], owner).unwrap();

        repo.save(&store.snapshot()).await.unwrap();
        let raw = kv.get(ROSTER_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let team = &value["teams"][0];
        assert_eq!(team["name"], "Doc");
        assert_eq!(team["createdBy"], owner.to_string());
        assert!(team["createdAt"].is_i64());
        assert_eq!(team["players"][0]["id"], 3);
    }
}
