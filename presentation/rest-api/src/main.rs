use dotenvy::dotenv;

mod api;
mod config;
mod middleware;
mod setup;

use config::{app_config::AppConfig, log_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Loads configuration, installs logging, wires dependencies, and serves the
/// catalog until a shutdown signal arrives.
///
/// - config/: Application configuration (server, CORS, rate limits, logging)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and views
/// - middleware/: Request admission control
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = AppConfig::from_env();

    // 3. Initialize tracing with RUST_LOG env filter
    log_config::init_tracing(&config.log);

    // 4. Wire dependencies
    let container = DependencyContainer::new()?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
