//! Server binary: reads config from the environment, prepares the store, serves the API.

use favorites_api::{app, connect, ensure_tables, seed, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("favorites_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(backend = ?config.backend, "connecting to store");
    let pool = connect(&config.database_url, 5).await?;
    ensure_tables(&pool, config.backend).await?;
    if config.seed_demo_data {
        seed::seed_demo_data(&pool).await?;
    }

    let state = AppState::new(pool, config.default_user_id);
    let listener = TcpListener::bind(config.bind_addr()?).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
