use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mindcare_api::config::{AppConfig, LogFormat};
use mindcare_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    let state = AppState::from_config(&config)?;
    let app = mindcare_api::router(state, &config);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "MindCare API listening");

    axum::serve(listener, app).await?;
    Ok(())
}
