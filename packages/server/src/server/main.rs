// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use atlas_core::domains::access::AccessControlService;
use atlas_core::kernel::{start_scheduler, ServerDeps};
use atlas_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,atlas_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CPZ Atlas API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(moderator = %config.moderator_email, "Configuration loaded");

    // Access state lives for the whole process; nothing is persisted
    let access = Arc::new(AccessControlService::new(
        &config.moderator_email,
        ServerDeps::production(),
    ));

    // Keep the scheduler handle alive for the lifetime of the server
    let _scheduler = start_scheduler(access.clone(), &config.grant_prune_schedule)
        .await
        .context("Failed to start scheduled tasks")?;

    // Build application
    let app = build_app(access, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
