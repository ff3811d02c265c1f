// Team domain module
// Contains the dream team aggregate root, value objects, and domain events

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use team::DreamTeam;
pub use value_objects::{TeamId, TeamName};
