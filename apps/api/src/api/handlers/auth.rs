use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::JwtAuth;
use crate::api::state::AppState;
use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, validate_password, verify_password};
use crate::domain::repositories::user_repository::User;
use crate::domain::user::value_objects::Username;

/// Request body for registration and login
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Response from successful registration or login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user_id: Uuid,
    pub username: String,
}

/// Current user, without credentials
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

fn issue_token(state: &AppState, user_id: Uuid) -> Result<String, ApiError> {
    create_token(user_id, &state.auth.jwt_secret, state.auth.token_ttl)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create token: {}", e)))
}

/// Register a new user and log them in
///
/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let username = Username::new(&req.username)
        .map_err(|e| ApiError::bad_request(format!("Invalid username: {}", e)))?;

    validate_password(&req.password).map_err(ApiError::bad_request)?;

    let password_hash = hash_password(&req.password, state.auth.bcrypt_cost)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to hash password: {}", e)))?;

    let user = User {
        id: Uuid::new_v4(),
        username: username.clone(),
        password_hash,
        created_at: Utc::now().trunc_subsecs(3),
    };

    let user_id = state.users.create(user).await?;
    tracing::info!(%user_id, username = %username, "User registered");

    let token = issue_token(&state, user_id)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user_id,
            username: username.to_string(),
        }),
    ))
}

/// Login with username and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    // A name that could never be registered is just an unknown user here
    let username =
        Username::new(&req.username).map_err(|_| ApiError::unauthorized("Invalid credentials"))?;

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
        ApiError::internal_server_error(format!("Password verification failed: {}", e))
    })?;

    if !valid {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = issue_token(&state, user.id)?;
    tracing::debug!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse {
        token,
        user_id: user.id,
        username: user.username.to_string(),
    }))
}

/// Current user for the presented token
///
/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unknown user"))?;

    Ok(Json(UserResponse {
        id: user.id,
        username: user.username.to_string(),
        created_at: user.created_at,
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
