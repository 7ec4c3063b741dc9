//! Server setup and lifecycle management

use crate::api::{create_router, AppState};
use crate::config::ServiceConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::storage::{InMemoryStorage, Storage};
use chrono::Utc;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Tradeguard API server
pub struct Server {
    config: ServiceConfig,
    storage: Arc<dyn Storage>,
}

impl Server {
    /// Create a new server with the given configuration
    pub fn new(config: ServiceConfig) -> Self {
        let storage: Arc<dyn Storage> = if config.storage.seed_fixtures {
            Arc::new(InMemoryStorage::seeded(Utc::now()))
        } else {
            Arc::new(InMemoryStorage::new())
        };

        Self { config, storage }
    }

    /// Run the server until shutdown
    pub async fn run(self) -> ServiceResult<()> {
        let addr = self.config.server.listen_addr;

        let state = AppState::new(self.storage.clone());
        let app = create_router(state, self.config.server.enable_cors);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Tradeguard service listening on {}", addr);
        tracing::info!(seed_fixtures = self.config.storage.seed_fixtures, "Storage ready");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServiceError::Server(e.to_string()))?;

        tracing::info!("Tradeguard service shutting down");

        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
