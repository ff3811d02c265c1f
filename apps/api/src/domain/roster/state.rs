use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::errors::{RosterError, RosterResult};
use crate::domain::player::PlayerId;
use crate::domain::team::{DreamTeam, TeamId};

/// Persisted form of the roster store
///
/// `{ "teams": [...] }` with teams in creation order. This is the whole
/// document written under the roster key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterState {
    pub teams: Vec<DreamTeam>,
}

impl RosterState {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Builds the player -> team index, checking invariants on the way
    ///
    /// # Returns
    /// * `Ok(HashMap)` - Every assigned player mapped to its one team
    /// * `Err(RosterError::InconsistentState)` - Duplicate team ids, or a
    ///   player listed twice in one team or in two teams
    ///
    /// Names need no check here; `TeamName` cannot hold a blank value.
    pub fn owner_index(&self) -> RosterResult<HashMap<PlayerId, TeamId>> {
        let mut team_ids = HashSet::with_capacity(self.teams.len());
        let mut owners = HashMap::new();

        for team in &self.teams {
            if !team_ids.insert(team.id()) {
                return Err(RosterError::InconsistentState(format!(
                    "team {} appears more than once",
                    team.id()
                )));
            }

            for player in team.players() {
                if let Some(previous) = owners.insert(player.id, team.id()) {
                    let detail = if previous == team.id() {
                        format!("player {} is listed twice in team {}", player.id, team.id())
                    } else {
                        format!(
                            "player {} belongs to both team {} and team {}",
                            player.id,
                            previous,
                            team.id()
                        )
                    };
                    return Err(RosterError::InconsistentState(detail));
                }
            }
        }

        Ok(owners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn team_json(id: Uuid, player_ids: &[u64]) -> serde_json::Value {
        let players: Vec<_> = player_ids
            .iter()
            .map(|pid| {
                json!({
                    "id": pid,
                    "first_name": "F",
                    "last_name": "L",
                    "position": "C",
                    "team": { "id": 1, "name": "N", "full_name": "N N", "abbreviation": "NN" }
                })
            })
            .collect();

        json!({
            "id": id.to_string(),
            "name": "Team",
            "players": players,
            "createdBy": Uuid::new_v4().to_string(),
            "createdAt": 1_700_000_000_000i64
        })
    }

    #[test]
    fn empty_state_is_consistent() {
        let state = RosterState::default();
        assert!(state.is_empty());
        assert!(state.owner_index().unwrap().is_empty());
    }

    #[test]
    fn owner_index_maps_players_to_teams() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let state: RosterState = serde_json::from_value(json!({
            "teams": [team_json(a, &[1, 2]), team_json(b, &[3])]
        }))
        .unwrap();

        let owners = state.owner_index().unwrap();
        assert_eq!(owners.get(&PlayerId::new(2)), Some(&TeamId::from(a)));
        assert_eq!(owners.get(&PlayerId::new(3)), Some(&TeamId::from(b)));
    }

    #[test]
    fn player_listed_twice_in_one_team_is_inconsistent() {
        let state: RosterState = serde_json::from_value(json!({
            "teams": [team_json(Uuid::new_v4(), &[4, 4])]
        }))
        .unwrap();

        let err = state.owner_index().unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn player_in_two_teams_is_inconsistent() {
        let state: RosterState = serde_json::from_value(json!({
            "teams": [team_json(Uuid::new_v4(), &[4]), team_json(Uuid::new_v4(), &[4])]
        }))
        .unwrap();

        let err = state.owner_index().unwrap_err();
        assert!(err.to_string().contains("belongs to both"));
    }

    #[test]
    fn blank_team_name_fails_to_deserialize() {
        let mut team = team_json(Uuid::new_v4(), &[]);
        team["name"] = json!("   ");

        let result: Result<RosterState, _> = serde_json::from_value(json!({ "teams": [team] }));
        assert!(result.is_err());
    }
}
