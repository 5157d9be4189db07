use std::{env, sync::Arc};

use hours_tracker::api::{AppState, create_router};
use hours_tracker::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable naming the configuration directory.
const CONFIG_DIR_VAR: &str = "TRACKER_CONFIG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "./config".to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let store = Arc::new(config.sheet_store());
    info!(
        config = %config_dir,
        worksheet = %config.sheet_path().display(),
        "Configuration loaded"
    );

    let bind = config.server().bind.clone();
    let app = create_router(AppState::new(config, store));

    info!("listening on http://{bind}");
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
