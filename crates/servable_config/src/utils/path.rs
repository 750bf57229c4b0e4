use std::path::{Path, PathBuf};

use crate::config::SERVABLES_SUBDIR;
use crate::errors::{ServableConfigError, ServableConfigResult};

/// Expand home directory (~) in path
///
/// Converts paths starting with ~ to the user's home directory
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Resolve the servables directory for a project root
///
/// The root is home-expanded and made absolute against the current directory,
/// then joined with `models/servables`. Only `.` components are dropped; `..`
/// is kept so the OS resolves it after any symlink, exactly as it would when
/// opening the path.
pub fn resolve_base_dir(root: &Path) -> ServableConfigResult<PathBuf> {
    let expanded = expand_home(root);
    let mut base_dir =
        std::path::absolute(&expanded).map_err(|source| ServableConfigError::IoError {
            path: expanded.clone(),
            source,
        })?;

    base_dir.extend(SERVABLES_SUBDIR);
    Ok(base_dir)
}
