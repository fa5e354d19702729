use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::info;

use submissions_api::{app, config::Config, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "submissions_api=debug,submission_store=debug,tower_http=debug".into()
            }),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        environment = %config.environment,
        db_file = %config.db_file.display(),
        "Loaded configuration"
    );

    let state = AppState::new(config.db_file.clone());
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server is running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
