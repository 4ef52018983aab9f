//! Durable key/value storage used as the local fallback for portfolio content

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::StorageConfig;

pub mod filesystem;
pub mod memory;

pub use filesystem::FilesystemStorage;
pub use memory::MemoryStorage;

/// Trait for fallback storage backends
#[async_trait]
pub trait Storage: Send + Sync {
    /// Get a stored value by key
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under a key
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Delete a key; deleting a missing key is not an error
    async fn delete(&self, key: &str) -> Result<()>;

    /// Get storage backend name
    fn name(&self) -> &'static str;
}

/// Create the backend selected in configuration
pub async fn create_storage(config: &StorageConfig) -> Result<Arc<dyn Storage>> {
    match config {
        StorageConfig::Memory => Ok(Arc::new(MemoryStorage::new())),
        StorageConfig::Filesystem { path } => {
            let storage = FilesystemStorage::new(path.clone()).await?;
            Ok(Arc::new(storage))
        }
    }
}
