// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::registration_service::RegistrationService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::store_factory::build_store;
use crate::presentation::app_state::AppState;
use crate::presentation::router::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create dataset store (infrastructure layer)
    let store = build_store(&config.store)?;

    // Create services (application layer)
    let dashboard_service = DashboardService::new(store);
    let registration_service = RegistrationService::new();

    // Warm the session so the first page view does not wait on the store
    dashboard_service.load().await;

    let state = Arc::new(AppState {
        dashboard_service,
        registration_service,
    });

    // Build router (presentation layer)
    let router = router(state);

    // Start server
    let addr = config.server.bind;
    tracing::info!("Starting agro-forecast service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
