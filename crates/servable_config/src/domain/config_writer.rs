use async_trait::async_trait;
use std::path::Path;

use crate::errors::ServableConfigResult;

/// Domain trait for persisting a rendered config document
#[async_trait]
pub trait ConfigWriter: Send + Sync {
    /// Replace the contents of `path` with `content`, creating the file if needed
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of bytes written
    /// * `Err(ServableConfigError)` - If the file cannot be written
    async fn write_config(&self, path: &Path, content: &str) -> ServableConfigResult<u64>;
}
