// Repository ports
// Domain-side contracts; adapters live in the infrastructure layer

pub mod errors;
pub mod key_value_store;
pub mod roster_repository;
pub mod user_repository;

pub use errors::{RepositoryError, RepositoryResult};
pub use key_value_store::KeyValueStore;
pub use roster_repository::RosterRepository;
pub use user_repository::{User, UserRepository};
