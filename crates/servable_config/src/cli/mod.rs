use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DEFAULT_FILTER, DEFAULT_OUTPUT, DEFAULT_PLATFORM, ROOT_ENV_VAR};
use crate::errors::{ServableConfigError, ServableConfigResult};
use crate::utils::path::resolve_base_dir;

/// Servable Config Generator
///
/// Scans `<root>/models/servables` for model directories whose names contain
/// a filter string and writes a TensorFlow Serving `model_config_list` for them.
///
/// ## Usage
/// ```bash
/// CLASSIFY=/srv/classify servable-config
/// servable-config --root /srv/classify --filter resnet --sort -o serving/models.pbtxt
/// ```
///
/// The generated file is passed to the model server with
/// `--model_config_file=brandon_config.pbtxt`.
///
/// ## Environment Variables
/// - `CLASSIFY`: Project root, used when `--root` is not given
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "servable-config")]
#[command(about = "Generate a TensorFlow Serving model config from servable directories")]
#[command(version)]
#[command(
    long_about = "Lists the immediate subdirectories of <root>/models/servables, keeps those whose name contains the filter, \nand emits a model_config_list entry for each. The document is printed to stdout and written to the output file."
)]
pub struct Cli {
    /// Project root containing `models/servables`
    #[arg(long, env = ROOT_ENV_VAR, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Substring a directory name must contain to be served
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_FILTER)]
    pub filter: String,

    /// Value emitted as `model_platform` for every entry
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PLATFORM)]
    pub platform: String,

    /// File the config document is written to
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Sort entries by name instead of keeping directory listing order
    #[arg(long)]
    pub sort: bool,

    /// Print the document without writing the output file
    #[arg(long)]
    pub no_write: bool,
}

impl Cli {
    /// Parse CLI arguments and the environment into a configuration
    pub fn parse_config() -> ServableConfigResult<Config> {
        Self::parse().into_config()
    }

    /// Resolve the servables directory and build the run configuration
    pub fn into_config(self) -> ServableConfigResult<Config> {
        let root = self
            .root
            .ok_or(ServableConfigError::MissingRoot { var: ROOT_ENV_VAR })?;
        let base_dir = resolve_base_dir(&root)?;

        Ok(Config {
            base_dir,
            filter: self.filter,
            platform: self.platform,
            output: self.output,
            sort: self.sort,
            no_write: self.no_write,
        })
    }
}
