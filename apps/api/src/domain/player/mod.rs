// Player domain module
// Players come from the external NBA catalog and are copied by value into teams

pub mod value_objects;

pub use value_objects::{NbaTeam, Player, PlayerId};
