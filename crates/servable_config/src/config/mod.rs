use std::path::PathBuf;

/// Environment variable naming the project root
pub const ROOT_ENV_VAR: &str = "CLASSIFY";

/// Path segments joined onto the root to reach the servables directory
pub const SERVABLES_SUBDIR: [&str; 2] = ["models", "servables"];

pub const DEFAULT_FILTER: &str = "nuclear_test";
pub const DEFAULT_PLATFORM: &str = "tensorflow";
pub const DEFAULT_OUTPUT: &str = "brandon_config.pbtxt";

/// Configuration derived from CLI arguments and the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose immediate children are scanned
    pub base_dir: PathBuf,
    /// Substring a directory name must contain to be served
    pub filter: String,
    pub platform: String,
    pub output: PathBuf,
    /// Sort records by name instead of keeping listing order
    pub sort: bool,
    /// Skip writing the output file
    pub no_write: bool,
}

impl Config {
    /// Build a configuration with defaults for everything but the base directory
    #[cfg(test)]
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            filter: DEFAULT_FILTER.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            sort: false,
            no_write: false,
        }
    }
}
