//! Binary crate for the weather forecast gateway.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and loading configuration
//! - Logging initialization
//! - Wiring HTTP routes to the forecast resolver

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weather_core::{ForecastResolver, GatewayConfig, NwsClient};

mod routes;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather forecast gateway")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "weather-gateway.toml")]
    config: PathBuf,

    /// Override the configured bind address, e.g. "127.0.0.1:9000".
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();

    let mut config = GatewayConfig::load(&cli.config)?;
    if let Some(bind) = cli.bind {
        config.bind_addr = bind;
    }

    let client = NwsClient::new(&config).context("Failed to build upstream HTTP client")?;
    let resolver = ForecastResolver::new(client);
    let app = routes::router(Arc::new(routes::AppState::new(resolver)));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "weather gateway listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("weather_server=info,weather_core=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}
