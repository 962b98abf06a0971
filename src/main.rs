//! # Projeto GE Server
//!
//! Backend API for the Projeto GE portfolio management system.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool and migrations
//! - HTTP server

use anyhow::Result;
use tracing::info;

use ge_server::config::Settings;
use ge_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for structured logging
    ge_server::telemetry::init_tracing();

    info!("Starting Projeto GE server...");

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        project = %settings.project_name,
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    // Build and run the application
    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
