//! Shift pay server.
//!
//! Serves the shift pay HTTP API using the configuration file named by
//! `SHIFT_PAY_CONFIG` (default `./config/shift-pay.yaml`).

use std::env;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use shift_pay::api::{AppState, create_router};
use shift_pay::config::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load_or_default(&config_path)?.into_config();

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("shift_pay={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        config = %config_path,
        "Starting shift pay server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!("Listening on {}", address);

    let app = create_router(AppState::new(config));
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
