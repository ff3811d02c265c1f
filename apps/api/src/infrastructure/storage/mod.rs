// Key-value storage adapters

pub mod file;
pub mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
