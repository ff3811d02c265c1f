use super::events::TeamEvent;
use super::value_objects::{TeamId, TeamName};
use crate::domain::player::{Player, PlayerId};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// DreamTeam aggregate root
///
/// A named roster of NBA players assembled by one user.
///
/// # Invariants
/// - Name is non-empty (guaranteed by `TeamName`)
/// - Player ids are unique within the team
/// - Players keep insertion order
///
/// Exclusivity of a player across teams is not something a single team can
/// see, so the roster mutators are crate-private and only the roster store
/// calls them.
///
/// # Serialized form
/// Field names follow the stored document: `createdBy`, and `createdAt` as
/// milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamTeam {
    id: TeamId,
    name: TeamName,
    players: Vec<Player>,
    created_by: Uuid,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl DreamTeam {
    /// Creates a new DreamTeam
    ///
    /// # Arguments
    /// * `name` - Validated team name
    /// * `players` - Initial roster; repeated ids keep their first occurrence
    /// * `created_by` - ID of the user creating the team
    ///
    /// # Returns
    /// The new team and the `Created` event describing it
    pub(crate) fn new(name: TeamName, players: Vec<Player>, created_by: Uuid) -> (Self, TeamEvent) {
        let mut team = Self {
            id: TeamId::new(),
            name,
            players: Vec::with_capacity(players.len()),
            created_by,
            // Stored with millisecond precision
            created_at: Utc::now().trunc_subsecs(3),
        };

        for player in players {
            if !team.contains(player.id) {
                team.players.push(player);
            }
        }

        let event = TeamEvent::Created {
            team_id: team.id,
            name: team.name.to_string(),
            created_by: team.created_by,
            player_count: team.players.len(),
        };

        (team, event)
    }

    /// Replaces the team name; everything else is left untouched
    pub(crate) fn rename(&mut self, name: TeamName) -> TeamEvent {
        self.name = name;
        TeamEvent::Renamed {
            team_id: self.id,
            name: self.name.to_string(),
        }
    }

    /// Appends a player unless one with the same id is already present
    ///
    /// # Returns
    /// * `Some(TeamEvent)` - Player was appended
    /// * `None` - Player id already on this roster
    pub(crate) fn push_player(&mut self, player: Player) -> Option<TeamEvent> {
        if self.contains(player.id) {
            return None;
        }

        let player_id = player.id;
        self.players.push(player);

        Some(TeamEvent::PlayerAdded {
            team_id: self.id,
            player_id,
        })
    }

    /// Removes a player by id, returning it if it was on the roster
    pub(crate) fn take_player(&mut self, player_id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id == player_id)?;
        Some(self.players.remove(index))
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &TeamName {
        &self.name
    }

    /// Returns the roster in insertion order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns true when a player with this id is on the roster
    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    /// Returns the ID of the user who created the team
    pub fn created_by(&self) -> Uuid {
        self.created_by
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
