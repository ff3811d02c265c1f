use thiserror::Error;
use uuid::Uuid;

use crate::domain::team::TeamId;

/// Errors reported by roster store operations
///
/// None of these are fatal: every operation that returns one has left the
/// store exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Invalid team name: {0}")]
    InvalidName(String),

    #[error("Team not found: {0}")]
    TeamNotFound(TeamId),

    #[error("User {actor} does not own team {team_id}")]
    Forbidden { team_id: TeamId, actor: Uuid },

    #[error("Inconsistent roster state: {0}")]
    InconsistentState(String),
}

pub type RosterResult<T> = Result<T, RosterError>;
