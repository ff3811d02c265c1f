use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::user::value_objects::Username;

/// User data for persistence
///
/// Only the bcrypt hash of the password is ever stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: Username,
    pub password_hash: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Repository trait for registered users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Register a new user
    ///
    /// Fails with `DuplicateUsername` if the name is taken, ignoring case.
    async fn create(&self, user: User) -> RepositoryResult<Uuid>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;

    /// Find a user by username, ignoring case
    async fn find_by_username(&self, username: &Username) -> RepositoryResult<Option<User>>;
}
