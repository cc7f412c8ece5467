//! Campus API - HTTP service for the student, course and enrollment registry

use anyhow::{Context, Result};
use campus_api::{config::ApiConfig, create_router, AppState};
use campus_domain::CampusServices;
use campus_memory::InMemoryStore;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env()?;
    config.init_tracing()?;

    info!(
        host = %config.host,
        port = config.port,
        log_format = %config.log_format,
        "Starting campus-api"
    );

    let services = CampusServices::new(InMemoryStore::new());
    let app = create_router(AppState::new(services));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("Server listening on {}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
