use std::collections::{HashMap, HashSet};

use serde::Serialize;
use uuid::Uuid;

use super::errors::{RosterError, RosterResult};
use super::state::RosterState;
use crate::domain::player::{Player, PlayerId};
use crate::domain::team::{DreamTeam, TeamEvent, TeamId, TeamName};

/// Result of a successful `create_team`
#[derive(Debug, Clone)]
pub struct CreatedTeam {
    /// The team as stored, after filtering
    pub team: DreamTeam,
    /// Requested players that already belonged to another team
    pub dropped: Vec<Player>,
}

/// Outcome of `add_player_to_team` once the target team is known to exist
///
/// Only `Added` changes the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum AddPlayerOutcome {
    Added,
    AlreadyInThisTeam,
    AlreadyInOtherTeam { team_id: TeamId },
}

impl AddPlayerOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddPlayerOutcome::Added => "added",
            AddPlayerOutcome::AlreadyInThisTeam => "already_in_this_team",
            AddPlayerOutcome::AlreadyInOtherTeam { .. } => "already_in_other_team",
        }
    }
}

/// In-memory roster of every dream team
///
/// The only place dream teams are mutated. Every operation runs to
/// completion without I/O and leaves the store satisfying:
/// - Team ids are unique
/// - Player ids are unique within a team
/// - A player id appears in at most one team
/// - Team names are non-empty
///
/// `owners` maps each assigned player to its team and is updated in the same
/// call that changes a roster, so exclusivity checks never scan teams.
///
/// Ownership of a team is not checked by the mutators; callers acting on
/// behalf of a user go through `authorize` first.
///
/// # Example
/// ```
/// use dreamteam_api::domain::roster::{AddPlayerOutcome, RosterStore};
/// use dreamteam_api::domain::player::{NbaTeam, Player, PlayerId};
/// use uuid::Uuid;
///
/// let mut store = RosterStore::new();
/// let created = store.create_team("Dream", vec![], Uuid::new_v4()).expect("valid name");
///
/// let player = Player::new(
///     PlayerId::new(7),
///     "Kevin",
///     "Durant",
///     "F",
///     NbaTeam {
///         id: 24,
///         name: "Suns".to_string(),
///         full_name: "Phoenix Suns".to_string(),
///         abbreviation: "PHX".to_string(),
///     },
/// );
///
/// let team_id = created.team.id();
/// assert_eq!(store.add_player_to_team(team_id, player.clone()), Ok(AddPlayerOutcome::Added));
/// assert_eq!(store.add_player_to_team(team_id, player), Ok(AddPlayerOutcome::AlreadyInThisTeam));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    teams: Vec<DreamTeam>,
    owners: HashMap<PlayerId, TeamId>,
    journal: Vec<TeamEvent>,
}

impl RosterStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from persisted state
    ///
    /// # Returns
    /// * `Ok(RosterStore)` - State satisfies every roster invariant
    /// * `Err(RosterError::InconsistentState)` - Duplicate team ids, or a
    ///   player listed twice in one team or in two teams
    pub fn from_state(state: RosterState) -> RosterResult<Self> {
        let owners = state.owner_index()?;

        Ok(Self {
            teams: state.teams,
            owners,
            journal: Vec::new(),
        })
    }

    /// Copies the current teams out for persistence
    pub fn snapshot(&self) -> RosterState {
        RosterState {
            teams: self.teams.clone(),
        }
    }

    /// Creates a team and appends it to the store
    ///
    /// # Arguments
    /// * `name` - Team name; trimmed before validation
    /// * `initial_players` - Requested roster
    /// * `created_by` - Acting user, recorded as the owner
    ///
    /// # Returns
    /// * `Ok(CreatedTeam)` - The stored team plus any players that were
    ///   dropped because another team already has them
    /// * `Err(RosterError::InvalidName)` - Blank name; nothing is created
    ///
    /// A player repeated in `initial_players` is kept once and is not
    /// reported as dropped.
    pub fn create_team(
        &mut self,
        name: &str,
        initial_players: Vec<Player>,
        created_by: Uuid,
    ) -> RosterResult<CreatedTeam> {
        let name = TeamName::new(name).map_err(RosterError::InvalidName)?;

        let mut seen = HashSet::with_capacity(initial_players.len());
        let mut kept = Vec::with_capacity(initial_players.len());
        let mut dropped = Vec::new();

        for player in initial_players {
            if !seen.insert(player.id) {
                continue;
            }
            if self.owners.contains_key(&player.id) {
                dropped.push(player);
            } else {
                kept.push(player);
            }
        }

        if !dropped.is_empty() {
            let names: Vec<String> = dropped.iter().map(Player::display_name).collect();
            tracing::warn!(
                team = %name,
                dropped = %names.join(", "),
                "Some players were already in other teams and were filtered out"
            );
        }

        let (team, event) = DreamTeam::new(name, kept, created_by);
        for player in team.players() {
            self.owners.insert(player.id, team.id());
        }

        self.teams.push(team.clone());
        self.journal.push(event);

        Ok(CreatedTeam { team, dropped })
    }

    /// Deletes a team, releasing its players
    ///
    /// Unknown ids are ignored, so deleting twice is the same as deleting
    /// once. Returns the removed team if there was one.
    pub fn delete_team(&mut self, team_id: TeamId) -> Option<DreamTeam> {
        let index = self.position(team_id)?;
        let team = self.teams.remove(index);

        for player in team.players() {
            self.owners.remove(&player.id);
        }

        self.journal.push(TeamEvent::Deleted {
            team_id,
            released_players: team.players().len(),
        });

        Some(team)
    }

    /// Renames a team in place
    ///
    /// # Returns
    /// * `Ok(())` - Name updated
    /// * `Err(RosterError::InvalidName)` - Blank name
    /// * `Err(RosterError::TeamNotFound)` - No such team
    pub fn rename_team(&mut self, team_id: TeamId, new_name: &str) -> RosterResult<()> {
        let name = TeamName::new(new_name).map_err(RosterError::InvalidName)?;
        let index = self
            .position(team_id)
            .ok_or(RosterError::TeamNotFound(team_id))?;

        let event = self.teams[index].rename(name);
        self.journal.push(event);

        Ok(())
    }

    /// Adds a player to a team's roster
    ///
    /// # Returns
    /// * `Ok(AddPlayerOutcome::Added)` - Player appended to the roster
    /// * `Ok(AddPlayerOutcome::AlreadyInOtherTeam)` - Another team owns the
    ///   player; checked before the same-team case
    /// * `Ok(AddPlayerOutcome::AlreadyInThisTeam)` - Already on this roster
    /// * `Err(RosterError::TeamNotFound)` - No such team
    pub fn add_player_to_team(
        &mut self,
        team_id: TeamId,
        player: Player,
    ) -> RosterResult<AddPlayerOutcome> {
        let index = self
            .position(team_id)
            .ok_or(RosterError::TeamNotFound(team_id))?;

        match self.owners.get(&player.id) {
            Some(&owner) if owner != team_id => {
                tracing::warn!(
                    player = %player.display_name(),
                    %owner,
                    "Player is already in another team"
                );
                return Ok(AddPlayerOutcome::AlreadyInOtherTeam { team_id: owner });
            }
            Some(_) => return Ok(AddPlayerOutcome::AlreadyInThisTeam),
            None => {}
        }

        let player_id = player.id;
        match self.teams[index].push_player(player) {
            Some(event) => {
                self.owners.insert(player_id, team_id);
                self.journal.push(event);
                Ok(AddPlayerOutcome::Added)
            }
            // The index and the roster agree, so this only happens if they drifted
            None => Err(RosterError::InconsistentState(format!(
                "player {} on team {} is missing from the owner index",
                player_id, team_id
            ))),
        }
    }

    /// Removes a player from a team's roster
    ///
    /// A missing team, or a player not on that team, is a no-op. Other teams
    /// are never touched. Returns the removed player if there was one.
    pub fn remove_player_from_team(&mut self, team_id: TeamId, player_id: PlayerId) -> Option<Player> {
        if self.owners.get(&player_id) != Some(&team_id) {
            return None;
        }

        let index = self.position(team_id)?;
        let player = self.teams[index].take_player(player_id)?;
        self.owners.remove(&player_id);

        self.journal.push(TeamEvent::PlayerRemoved { team_id, player_id });

        Some(player)
    }

    /// Teams created by `user_id`, in creation order
    pub fn list_teams_for_user(&self, user_id: Uuid) -> Vec<&DreamTeam> {
        self.teams
            .iter()
            .filter(|team| team.created_by() == user_id)
            .collect()
    }

    /// All teams in creation order
    pub fn teams(&self) -> &[DreamTeam] {
        &self.teams
    }

    pub fn get_team(&self, team_id: TeamId) -> Option<&DreamTeam> {
        self.teams.iter().find(|team| team.id() == team_id)
    }

    /// Returns the team a player is currently assigned to
    pub fn team_of(&self, player_id: PlayerId) -> Option<TeamId> {
        self.owners.get(&player_id).copied()
    }

    /// Checks that `actor` owns the team before it is mutated on their behalf
    ///
    /// # Returns
    /// * `Ok(&DreamTeam)` - Actor created the team
    /// * `Err(RosterError::TeamNotFound)` - No such team
    /// * `Err(RosterError::Forbidden)` - Team belongs to someone else
    pub fn authorize(&self, team_id: TeamId, actor: Uuid) -> RosterResult<&DreamTeam> {
        let team = self
            .get_team(team_id)
            .ok_or(RosterError::TeamNotFound(team_id))?;

        if team.created_by() != actor {
            return Err(RosterError::Forbidden { team_id, actor });
        }

        Ok(team)
    }

    /// Takes the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<TeamEvent> {
        std::mem::take(&mut self.journal)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    fn position(&self, team_id: TeamId) -> Option<usize> {
        self.teams.iter().position(|team| team.id() == team_id)
    }
}
