// Infrastructure layer module
// Contains storage adapters that implement the domain repository ports
// Follows Hexagonal Architecture

pub mod repositories;
pub mod storage;
