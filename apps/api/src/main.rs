use dreamteam_api::api::{router, AppState};
use dreamteam_api::config::AppConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration (.env first, then the environment)
    let config = AppConfig::from_env()?;

    // Open storage and load the stored roster
    let state = AppState::from_config(&config).await?;
    {
        let roster = state.roster.lock().await;
        tracing::info!(teams = roster.len(), "Roster ready");
    }

    let app = router(state);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
