//! Integration tests for file-backed persistence
//!
//! These tests verify that teams and users written through the API survive
//! a restart over the same data directory, and that a damaged roster file
//! does not stop the service from starting.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Duration;
use dreamteam_api::api::{router, AppState};
use dreamteam_api::config::{AppConfig, AuthSettings};
use dreamteam_api::domain::repositories::{KeyValueStore, RosterRepository};
use dreamteam_api::infrastructure::repositories::{KvRosterRepository, ROSTER_KEY};
use dreamteam_api::infrastructure::storage::FileKeyValueStore;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;
use tower::util::ServiceExt;

fn auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: "storage-test-secret".to_string(),
        token_ttl: Duration::hours(1),
        bcrypt_cost: 4,
    }
}

/// Start the app over file storage in `dir`
async fn start(dir: &Path) -> Router {
    let config = AppConfig {
        bind_addr: ([127, 0, 0, 1], 0).into(),
        data_dir: Some(dir.to_path_buf()),
        auth: auth(),
    };
    let state = AppState::from_config(&config)
        .await
        .expect("Failed to open file storage");
    router(state)
}

async fn post(app: &Router, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn get(app: &Router, uri: &str) -> Value {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn player(id: u64) -> Value {
    json!({
        "id": id,
        "first_name": "Dirk",
        "last_name": "Nowitzki",
        "position": "F",
        "country": "Germany",
        "team": { "id": 7, "name": "Mavericks", "full_name": "Dallas Mavericks", "abbreviation": "DAL" }
    })
}

#[tokio::test]
async fn test_teams_and_users_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    let team_id = {
        let app = start(dir.path()).await;
        let (status, json) = post(
            &app,
            "/api/auth/register",
            None,
            json!({ "username": "dirk", "password": "fadeaway" }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let token = json["token"].as_str().unwrap().to_string();

        let (status, json) = post(
            &app,
            "/api/teams",
            Some(&token),
            json!({ "name": "Mavs", "players": [player(41)] }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        json["team"]["id"].as_str().unwrap().to_string()
    };

    assert!(dir.path().join("teams.json").exists());
    assert!(dir.path().join("users.json").exists());

    let app = start(dir.path()).await;

    let team = get(&app, &format!("/api/teams/{}", team_id)).await;
    assert_eq!(team["name"], "Mavs");
    assert_eq!(team["players"][0]["id"], 41);
    assert_eq!(team["players"][0]["country"], "Germany");

    let (status, _) = post(
        &app,
        "/api/auth/login",
        None,
        json!({ "username": "DIRK", "password": "fadeaway" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_exclusivity_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let app = start(dir.path()).await;
        let (_, json) = post(
            &app,
            "/api/auth/register",
            None,
            json!({ "username": "first", "password": "password" }),
        )
        .await;
        let token = json["token"].as_str().unwrap().to_string();
        post(
            &app,
            "/api/teams",
            Some(&token),
            json!({ "name": "Holder", "players": [player(1)] }),
        )
        .await;
    }

    let app = start(dir.path()).await;
    let (_, json) = post(
        &app,
        "/api/auth/register",
        None,
        json!({ "username": "second", "password": "password" }),
    )
    .await;
    let token = json["token"].as_str().unwrap().to_string();

    let (status, json) = post(
        &app,
        "/api/teams",
        Some(&token),
        json!({ "name": "Taker", "players": [player(1)] }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["dropped_players"][0]["id"], 1);
    assert!(json["team"]["players"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupted_roster_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("teams.json"), "{\"teams\": [garbage").unwrap();

    let app = start(dir.path()).await;

    let teams = get(&app, "/api/teams").await;
    assert!(teams.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_save_of_loaded_roster_is_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    {
        let app = start(dir.path()).await;
        let (_, json) = post(
            &app,
            "/api/auth/register",
            None,
            json!({ "username": "stable", "password": "password" }),
        )
        .await;
        let token = json["token"].as_str().unwrap().to_string();
        post(
            &app,
            "/api/teams",
            Some(&token),
            json!({ "name": "Stable", "players": [player(3), player(4)] }),
        )
        .await;
    }

    let store: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(dir.path()).unwrap());
    let before = store.get(ROSTER_KEY).await.unwrap().unwrap();

    let repo = KvRosterRepository::new(store.clone());
    let loaded = repo.load().await;
    assert_eq!(loaded.teams.len(), 1);
    repo.save(&loaded).await.unwrap();

    assert_eq!(store.get(ROSTER_KEY).await.unwrap().unwrap(), before);
}
