use std::path::PathBuf;

/// Result type for config generation
pub type ServableConfigResult<T> = Result<T, ServableConfigError>;

/// Errors raised while discovering servables and writing the config
#[derive(thiserror::Error, Debug)]
pub enum ServableConfigError {
    /// The root path was neither passed on the command line nor set in the environment
    #[error("Root path is not set: pass --root or set the {var} environment variable")]
    MissingRoot { var: &'static str },
    #[error("Directory does not exist: {path}")]
    DirectoryNotFound { path: String },
    #[error("Not a directory: {path}")]
    NotADirectory { path: String },
    #[error("Permission denied for directory: {path}")]
    PermissionDenied { path: String },
    #[error("I/O error at {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl ServableConfigError {
    /// Map an I/O failure on a directory to the most specific variant
    pub fn from_dir_io(path: &std::path::Path, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::DirectoryNotFound {
                path: path.display().to_string(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.display().to_string(),
            },
            _ => Self::IoError {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
