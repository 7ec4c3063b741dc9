//! Tradeguard service daemon
//!
//! Serves the CRM, transactions, contact, decision-engine, and monitoring
//! APIs over seeded in-memory storage for development and end-to-end tests.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tradeguard_service::{ServiceConfig, ServiceError, ServiceResult, Server};

/// Tradeguard service CLI
#[derive(Parser)]
#[command(name = "tradeguardd")]
#[command(about = "Tradeguard mock API service", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "TRADEGUARD_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(
        short,
        long,
        env = "TRADEGUARD_LISTEN_ADDR",
        default_value = "127.0.0.1:8080"
    )]
    listen: String,

    /// Start with an empty store instead of the seeded fixtures
    #[arg(long, env = "TRADEGUARD_NO_SEED")]
    no_seed: bool,

    /// Log level
    #[arg(long, env = "TRADEGUARD_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "TRADEGUARD_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> ServiceResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load configuration
    let mut config = ServiceConfig::load(cli.config.as_deref())
        .map_err(|e| ServiceError::Config(e.to_string()))?;

    // Override with CLI args
    config.server.listen_addr = cli
        .listen
        .parse()
        .map_err(|e| ServiceError::Config(format!("Invalid listen address: {}", e)))?;

    if cli.no_seed {
        config.storage.seed_fixtures = false;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        "Starting Tradeguard service"
    );

    Server::new(config).run().await
}
