mod application;
mod cli;
mod config;
mod domain;
mod errors;
mod handlers;
mod models;
mod utils;

use cli::Cli;
use handlers::run;
use utils::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging based on environment
    logging::init_logging()?;

    // Resolve root, filter and output before touching the filesystem
    let config = match Cli::parse_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Failed to generate model config: {}", e);
        return Err(e);
    }

    Ok(())
}
