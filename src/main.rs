//! Pasar Commerce service entrypoint
//!
//! REST API for user registration and order placement.
//! Reads configuration from TOML file (~/.config/pasar-commerce/config.toml).

use std::sync::Arc;

use tracing::{error, info};

use pasar_commerce::application::{OrderService, UserService};
use pasar_commerce::infrastructure::InMemoryStore;
use pasar_commerce::{create_api_router, default_config_path, ApiState, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PASAR_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Pasar Commerce service...");

    // ── Explicit constructor composition: stores → services → router ──
    let user_store = Arc::new(InMemoryStore::new());
    let order_store = Arc::new(InMemoryStore::new());

    let user_service = Arc::new(UserService::new(user_store));
    let order_service = Arc::new(OrderService::new(order_store));

    let app = create_api_router(ApiState::new(user_service, order_service));

    // ── Serve ──────────────────────────────────────────────────
    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    info!("Swagger UI available at http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
