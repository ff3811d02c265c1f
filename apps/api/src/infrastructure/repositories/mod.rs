// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces on a KeyValueStore

pub mod kv_roster_repository;
pub mod kv_user_repository;

pub use kv_roster_repository::{KvRosterRepository, ROSTER_KEY};
pub use kv_user_repository::{KvUserRepository, USERS_KEY};
