mod cli;
mod config;
mod core;
mod openapi;
mod server;
mod utils;

use cli::Cli;
use utils::logging;

/// Time API Server
///
/// Serves the current time over HTTP:
/// - `GET /api/time`: RFC 1123, UNIX seconds and universal renderings
/// - `GET /openapi/v1.json`: OpenAPI document for the above
///
/// Usage: cargo run --bin time-api-server -- --port 5000
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments
    let config = Cli::parse_config()?;

    // Initialize logging based on environment
    logging::init_logging(config.log_format)?;

    tracing::info!("Starting Time API server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = server::run(config).await {
        tracing::error!("Failed to run Time API server: {}", e);
        return Err(e.into());
    }

    Ok(())
}
