// Roster domain module
// Owns every dream team and enforces that a player belongs to at most one team

pub mod errors;
pub mod state;
pub mod store;

pub use errors::{RosterError, RosterResult};
pub use state::RosterState;
pub use store::{AddPlayerOutcome, CreatedTeam, RosterStore};
