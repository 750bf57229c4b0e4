use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::domain::ServableScanner;
use crate::errors::{ServableConfigError, ServableConfigResult};
use crate::models::ServableDir;

/// Scans a directory on the local filesystem, one level deep
///
/// Entries that resolve to a directory are candidates, so symlinked model
/// directories are picked up. Anything else is skipped.
pub struct DirectoryScanner;

impl DirectoryScanner {
    pub fn new() -> Self {
        Self
    }

    /// Fail early with a precise error when the base directory is unusable
    async fn ensure_directory(&self, base_dir: &Path) -> ServableConfigResult<()> {
        let metadata = fs::metadata(base_dir)
            .await
            .map_err(|e| ServableConfigError::from_dir_io(base_dir, e))?;

        if !metadata.is_dir() {
            return Err(ServableConfigError::NotADirectory {
                path: base_dir.display().to_string(),
            });
        }
        Ok(())
    }
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServableScanner for DirectoryScanner {
    async fn scan(&self, base_dir: &Path, filter: &str) -> ServableConfigResult<Vec<ServableDir>> {
        self.ensure_directory(base_dir).await?;

        let mut entries = fs::read_dir(base_dir)
            .await
            .map_err(|e| ServableConfigError::from_dir_io(base_dir, e))?;

        let mut servables = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| ServableConfigError::from_dir_io(base_dir, e))?
        {
            let servable = ServableDir::new(entry.path());
            if !servable.matches(filter) {
                tracing::debug!(name = %servable.name(), "Skipping entry not matching filter");
                continue;
            }

            // Follow symlinks, like a plain directory check would
            match fs::metadata(servable.path()).await {
                Ok(metadata) if metadata.is_dir() => {
                    tracing::debug!(path = %servable.path().display(), "Found servable");
                    servables.push(servable);
                }
                Ok(_) => {
                    tracing::debug!(path = %servable.path().display(), "Skipping non-directory");
                }
                Err(e) => {
                    tracing::debug!(
                        path = %servable.path().display(),
                        error = %e,
                        "Skipping unresolvable entry"
                    );
                }
            }
        }

        Ok(servables)
    }
}
