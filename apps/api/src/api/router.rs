use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{auth, teams};
use crate::api::state::AppState;

/// Builds the application router
///
/// Shared by `main` and the integration tests.
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Auth routes
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        // Team routes
        .route("/api/teams", get(teams::list_teams).post(teams::create_team))
        .route("/api/teams/mine", get(teams::list_my_teams))
        .route(
            "/api/teams/:id",
            get(teams::get_team)
                .patch(teams::rename_team)
                .delete(teams::delete_team),
        )
        .route("/api/teams/:id/players", post(teams::add_player))
        .route(
            "/api/teams/:id/players/:player_id",
            delete(teams::remove_player),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
