use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::RepositoryError;
use crate::domain::roster::RosterError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 403 Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<RosterError> for ApiError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::InvalidName(_) => Self::bad_request(err.to_string()),
            RosterError::TeamNotFound(_) => Self::not_found(err.to_string()),
            RosterError::Forbidden { .. } => Self::forbidden("Only the team's creator may change it"),
            RosterError::InconsistentState(_) => {
                tracing::error!(error = %err, "Roster invariant check failed");
                Self::internal_server_error(err.to_string())
            }
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateUsername(_) => Self::bad_request("Username already taken"),
            other => {
                tracing::error!(error = %other, "Storage error");
                Self::internal_server_error(format!("Storage error: {}", other))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::TeamId;
    use uuid::Uuid;

    #[test]
    fn roster_errors_map_to_status_codes() {
        let cases = [
            (RosterError::InvalidName("x".into()), StatusCode::BAD_REQUEST),
            (RosterError::TeamNotFound(TeamId::new()), StatusCode::NOT_FOUND),
            (
                RosterError::Forbidden {
                    team_id: TeamId::new(),
                    actor: Uuid::new_v4(),
                },
                StatusCode::FORBIDDEN,
            ),
            (
                RosterError::InconsistentState("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn duplicate_username_is_bad_request() {
        let err = ApiError::from(RepositoryError::DuplicateUsername("magic".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Username already taken");
    }

    #[test]
    fn storage_failure_is_internal() {
        let err = ApiError::from(RepositoryError::LockPoisoned);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
