use uuid::Uuid;

use super::value_objects::TeamId;
use crate::domain::player::PlayerId;

/// Domain events that occur within the DreamTeam aggregate
///
/// The roster store journals one event per successful mutation. The API
/// layer drains the journal after the write-through save and logs it.
///
/// # Example
/// ```
/// use dreamteam_api::domain::team::events::TeamEvent;
/// use dreamteam_api::domain::team::value_objects::TeamId;
/// use uuid::Uuid;
///
/// let event = TeamEvent::Created {
///     team_id: TeamId::new(),
///     name: "Showtime".to_string(),
///     created_by: Uuid::new_v4(),
///     player_count: 0,
/// };
/// assert_eq!(event.kind(), "created");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a team is created
    Created {
        team_id: TeamId,
        name: String,
        /// User who created the team
        created_by: Uuid,
        /// Players kept after filtering out those owned elsewhere
        player_count: usize,
    },
    /// Fired when a team is renamed
    Renamed { team_id: TeamId, name: String },
    /// Fired when a team is deleted; its players are free again
    Deleted {
        team_id: TeamId,
        released_players: usize,
    },
    PlayerAdded { team_id: TeamId, player_id: PlayerId },
    PlayerRemoved { team_id: TeamId, player_id: PlayerId },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> TeamId {
        match self {
            TeamEvent::Created { team_id, .. } => *team_id,
            TeamEvent::Renamed { team_id, .. } => *team_id,
            TeamEvent::Deleted { team_id, .. } => *team_id,
            TeamEvent::PlayerAdded { team_id, .. } => *team_id,
            TeamEvent::PlayerRemoved { team_id, .. } => *team_id,
        }
    }

    /// Short label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            TeamEvent::Created { .. } => "created",
            TeamEvent::Renamed { .. } => "renamed",
            TeamEvent::Deleted { .. } => "deleted",
            TeamEvent::PlayerAdded { .. } => "player_added",
            TeamEvent::PlayerRemoved { .. } => "player_removed",
        }
    }
}
