use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::ConfigWriter;
use crate::errors::{ServableConfigError, ServableConfigResult};

const MAX_SYMLINK_HOPS: usize = 40;

/// Writes config documents to the local filesystem
///
/// Content goes to a temporary sibling first and is renamed over the target,
/// so readers never see a half-written config. When the output path is a
/// symlink the file it points at is replaced and the link stays in place.
pub struct ConfigFileWriter;

impl ConfigFileWriter {
    pub fn new() -> Self {
        Self
    }

    /// Create the parent directory of `path` when it is missing
    async fn ensure_parent_dir(&self, path: &Path) -> ServableConfigResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && fs::metadata(parent).await.is_err()
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| ServableConfigError::IoError {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Follow `path` through symlinks to the file that should receive the content
    ///
    /// Dangling links resolve to their target so it gets created, as opening
    /// the link for writing would.
    async fn resolve_target(&self, path: &Path) -> ServableConfigResult<PathBuf> {
        let mut target = path.to_path_buf();
        for _ in 0..MAX_SYMLINK_HOPS {
            match fs::symlink_metadata(&target).await {
                Ok(metadata) if metadata.file_type().is_symlink() => {
                    let link = fs::read_link(&target).await.map_err(|source| {
                        ServableConfigError::IoError {
                            path: target.clone(),
                            source,
                        }
                    })?;
                    target = match target.parent() {
                        Some(parent) if link.is_relative() => parent.join(link),
                        _ => link,
                    };
                }
                _ => return Ok(target),
            }
        }

        Err(ServableConfigError::IoError {
            path: path.to_path_buf(),
            source: std::io::Error::other("too many levels of symbolic links"),
        })
    }

    /// Temporary sibling path used while writing `path`
    fn temp_path(path: &Path) -> PathBuf {
        let suffix = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        match path.extension() {
            Some(extension) => path.with_extension(format!(
                "{}.{:016x}.tmp",
                extension.to_string_lossy(),
                suffix
            )),
            None => path.with_extension(format!("{:016x}.tmp", suffix)),
        }
    }

    /// Write `content` to a fresh temp file carrying the permissions of the file it replaces
    async fn write_temp(
        &self,
        temp_path: &Path,
        content: &str,
        permissions: Option<std::fs::Permissions>,
    ) -> std::io::Result<()> {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp_path)
            .await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        if let Some(permissions) = permissions {
            file.set_permissions(permissions).await?;
        }
        file.sync_all().await?;
        Ok(())
    }
}

impl Default for ConfigFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigWriter for ConfigFileWriter {
    async fn write_config(&self, path: &Path, content: &str) -> ServableConfigResult<u64> {
        let target = self.resolve_target(path).await?;
        self.ensure_parent_dir(&target).await?;

        let permissions = fs::metadata(&target).await.ok().map(|m| m.permissions());
        let temp_path = Self::temp_path(&target);
        if let Err(source) = self.write_temp(&temp_path, content, permissions).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(ServableConfigError::IoError {
                path: path.to_path_buf(),
                source,
            });
        }

        if let Err(source) = fs::rename(&temp_path, &target).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(ServableConfigError::IoError {
                path: path.to_path_buf(),
                source,
            });
        }

        tracing::debug!(
            path = %path.display(),
            target = %target.display(),
            bytes = content.len(),
            "Config written"
        );
        Ok(content.len() as u64)
    }
}
