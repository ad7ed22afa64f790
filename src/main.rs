use anyhow::Result;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lingovoice_backend::{create_routes, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Secrets usually come from .env; a missing file is fine
    let dotenv_path = dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lingovoice_backend=debug,tower_http=debug")),
        )
        .init();

    if let Some(path) = dotenv_path {
        info!("Loaded environment from: {}", path.display());
    }

    let mut config = load_config()?;
    config.apply_env_overrides();

    let app_state = AppState::new(config.clone())?;
    let app = create_routes(app_state);

    let host: std::net::IpAddr = config.system_config.host.parse()?;
    let addr = SocketAddr::from((host, config.system_config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_config() -> Result<Config> {
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    for path in &config_paths {
        if !std::path::Path::new(path).exists() {
            tracing::debug!("No config at {}", path);
            continue;
        }
        let config = Config::load(path)?;
        info!("Loaded configuration from: {}", path);
        return Ok(config);
    }

    warn!("No config file found (tried {:?}), using defaults", config_paths);
    Ok(Config::default())
}
