use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{ServableConfigError, ServableConfigResult};

/// Initialize logging based on environment configuration
///
/// Logs go to stderr; stdout is reserved for the generated document.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized or skipped
/// - `Err(ServableConfigError::LoggingInitialization)` if initialization fails
pub fn init_logging() -> ServableConfigResult<()> {
    // Skip logging entirely when RUST_LOG is not set
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| ServableConfigError::LoggingInitialization(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_logging_setup() {
        // Without RUST_LOG this is a no-op; with it, the first init must succeed
        let result = init_logging();
        assert!(result.is_ok());
    }
}
