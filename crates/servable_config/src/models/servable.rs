use derive_getters::Getters;
use std::path::PathBuf;

/// A model directory found directly under the servables directory
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ServableDir {
    /// Full path of the directory, as listed under the base directory
    path: PathBuf,
    /// Final path segment
    name: String,
}

impl ServableDir {
    /// Create a servable from its full path
    ///
    /// Non UTF-8 names are converted lossily.
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }

    /// Whether the directory name contains `filter`
    pub fn matches(&self, filter: &str) -> bool {
        self.name.contains(filter)
    }
}
