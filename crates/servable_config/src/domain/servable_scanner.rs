use async_trait::async_trait;
use std::path::Path;

use crate::{errors::ServableConfigResult, models::ServableDir};

/// Domain trait for discovering servable directories
///
/// Abstracts where servables come from so the generator can run against
/// the real filesystem or an in-memory listing.
#[async_trait]
pub trait ServableScanner: Send + Sync {
    /// List the direct child directories of `base_dir` whose names contain `filter`
    ///
    /// # Arguments
    /// * `base_dir` - Directory whose immediate children are inspected
    /// * `filter` - Substring a child's name must contain
    ///
    /// # Returns
    /// * `Ok(Vec<ServableDir>)` - Matches in listing order
    /// * `Err(ServableConfigError)` - If `base_dir` is missing or cannot be read
    async fn scan(&self, base_dir: &Path, filter: &str) -> ServableConfigResult<Vec<ServableDir>>;
}
