use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::repositories::user_repository::{User, UserRepository};
use crate::domain::repositories::{KeyValueStore, RepositoryError, RepositoryResult};
use crate::domain::user::value_objects::Username;

/// Well-known key of the registered users document
pub const USERS_KEY: &str = "users";

/// KeyValueStore implementation of UserRepository
///
/// All users live in one JSON array under `USERS_KEY`. Registration is a
/// read-modify-write of that array, serialized by `write_lock` so two
/// concurrent sign-ups cannot overwrite each other.
///
/// Unlike the roster, a malformed users document is an error: treating it
/// as empty would let taken usernames be registered again.
pub struct KvUserRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl KvUserRepository {
    /// Creates a new KvUserRepository
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> RepositoryResult<Vec<User>> {
        match self.store.get(USERS_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for KvUserRepository {
    async fn create(&self, user: User) -> RepositoryResult<Uuid> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.read_all().await?;
        if users.iter().any(|u| u.username.matches(&user.username)) {
            return Err(RepositoryError::DuplicateUsername(
                user.username.to_string(),
            ));
        }

        let id = user.id;
        users.push(user);

        let raw = serde_json::to_string(&users)?;
        self.store.put(USERS_KEY, &raw).await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let users = self.read_all().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    async fn find_by_username(&self, username: &Username) -> RepositoryResult<Option<User>> {
        let users = self.read_all().await?;
        Ok(users.into_iter().find(|u| u.username.matches(username)))
    }
}
