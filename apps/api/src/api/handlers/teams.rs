use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::{ApiPath, JwtAuth};
use crate::api::state::AppState;
use crate::domain::player::{Player, PlayerId};
use crate::domain::roster::{AddPlayerOutcome, RosterError};
use crate::domain::team::{DreamTeam, TeamId};

/// Request body for creating a team
#[derive(Debug, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

/// Request body for renaming a team
#[derive(Debug, Deserialize)]
pub struct RenameTeamRequest {
    pub name: String,
}

/// Team as returned by the API
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<Player>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&DreamTeam> for TeamResponse {
    fn from(team: &DreamTeam) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            players: team.players().to_vec(),
            created_by: team.created_by(),
            created_at: team.created_at(),
        }
    }
}

/// Response from team creation
///
/// `dropped_players` lists requested players that were left out because
/// another team already has them.
#[derive(Debug, Serialize)]
pub struct CreateTeamResponse {
    pub team: TeamResponse,
    pub dropped_players: Vec<Player>,
}

/// Response from adding a player
#[derive(Debug, Serialize)]
pub struct AddPlayerResponse {
    pub outcome: &'static str,
    pub team: TeamResponse,
}

/// List every team
///
/// GET /api/teams
pub async fn list_teams(State(state): State<AppState>) -> Json<Vec<TeamResponse>> {
    let roster = state.roster.lock().await;
    Json(roster.teams().iter().map(TeamResponse::from).collect())
}

/// List the caller's teams in creation order
///
/// GET /api/teams/mine
pub async fn list_my_teams(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
) -> Json<Vec<TeamResponse>> {
    let roster = state.roster.lock().await;
    Json(
        roster
            .list_teams_for_user(user_id)
            .into_iter()
            .map(TeamResponse::from)
            .collect(),
    )
}

/// Create a new team owned by the caller
///
/// POST /api/teams
pub async fn create_team(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Json(req): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<CreateTeamResponse>), ApiError> {
    let mut roster = state.roster.lock().await;
    let created = state
        .apply(&mut roster, |store| {
            Ok(store.create_team(&req.name, req.players, user_id)?)
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTeamResponse {
            team: TeamResponse::from(&created.team),
            dropped_players: created.dropped,
        }),
    ))
}

/// Get a team by ID
///
/// GET /api/teams/:id
pub async fn get_team(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<TeamId>,
) -> Result<Json<TeamResponse>, ApiError> {
    let roster = state.roster.lock().await;
    let team = roster
        .get_team(id)
        .ok_or(RosterError::TeamNotFound(id))?;

    Ok(Json(TeamResponse::from(team)))
}

/// Rename a team
///
/// PATCH /api/teams/:id
pub async fn rename_team(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    ApiPath(id): ApiPath<TeamId>,
    Json(req): Json<RenameTeamRequest>,
) -> Result<Json<TeamResponse>, ApiError> {
    let mut roster = state.roster.lock().await;
    state
        .apply(&mut roster, |store| {
            store.authorize(id, user_id)?;
            Ok(store.rename_team(id, &req.name)?)
        })
        .await?;

    let team = roster
        .get_team(id)
        .ok_or(RosterError::TeamNotFound(id))?;
    Ok(Json(TeamResponse::from(team)))
}

/// Delete a team
///
/// DELETE /api/teams/:id
///
/// Deleting a team that does not exist succeeds.
pub async fn delete_team(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    ApiPath(id): ApiPath<TeamId>,
) -> Result<StatusCode, ApiError> {
    let mut roster = state.roster.lock().await;
    state
        .apply(&mut roster, |store| {
            match store.authorize(id, user_id) {
                Ok(_) => {}
                Err(RosterError::TeamNotFound(_)) => return Ok(()),
                Err(e) => return Err(e.into()),
            }
            store.delete_team(id);
            Ok(())
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a player to a team
///
/// POST /api/teams/:id/players
///
/// 201 when added, 200 when the player was already on this team, 409 when
/// another team has the player.
pub async fn add_player(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    ApiPath(id): ApiPath<TeamId>,
    Json(player): Json<Player>,
) -> Result<(StatusCode, Json<AddPlayerResponse>), ApiError> {
    let player_name = player.display_name();
    let mut roster = state.roster.lock().await;
    let outcome = state
        .apply(&mut roster, |store| {
            store.authorize(id, user_id)?;
            Ok(store.add_player_to_team(id, player)?)
        })
        .await?;

    let status = match outcome {
        AddPlayerOutcome::Added => StatusCode::CREATED,
        AddPlayerOutcome::AlreadyInThisTeam => StatusCode::OK,
        AddPlayerOutcome::AlreadyInOtherTeam { team_id } => {
            return Err(ApiError::conflict(format!(
                "{} is already in another dream team ({})",
                player_name, team_id
            )));
        }
    };

    let team = roster
        .get_team(id)
        .ok_or(RosterError::TeamNotFound(id))?;
    Ok((
        status,
        Json(AddPlayerResponse {
            outcome: outcome.as_str(),
            team: TeamResponse::from(team),
        }),
    ))
}

/// Remove a player from a team
///
/// DELETE /api/teams/:id/players/:player_id
///
/// Removing from a missing team, or removing a player who is not on the
/// team, succeeds without changes.
pub async fn remove_player(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    ApiPath((id, player_id)): ApiPath<(TeamId, PlayerId)>,
) -> Result<StatusCode, ApiError> {
    let mut roster = state.roster.lock().await;
    state
        .apply(&mut roster, |store| {
            match store.authorize(id, user_id) {
                Ok(_) => {}
                Err(RosterError::TeamNotFound(_)) => return Ok(()),
                Err(e) => return Err(e.into()),
            }
            store.remove_player_from_team(id, player_id);
            Ok(())
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
