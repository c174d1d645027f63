//! Server binary: loads config from env, opens the database, creates and seeds tables, serves the API.

use starwars_api::{apply_migrations, build_router, connect, populate, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("starwars_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = connect(&config).await?;
    apply_migrations(&pool).await?;
    if config.seed_on_startup {
        populate(&pool).await?;
    }

    let state = AppState::new(pool, &config);
    let app = build_router(state, &config);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
