//! Filesystem storage backend

use crate::storage::Storage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Filesystem storage backend
///
/// Stores each key as a file under one directory. Persistent across
/// restarts, suitable for single-instance deployments.
#[derive(Clone)]
pub struct FilesystemStorage {
    root: PathBuf,
}

impl FilesystemStorage {
    /// Create the backend, creating its directory if needed
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create storage directory: {:?}", root))?;

        Ok(Self { root })
    }

    /// Get the file path for a key
    fn key_to_path(&self, key: &str) -> PathBuf {
        let safe_key: String = key
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' => '_',
                c => c,
            })
            .collect();

        self.root.join(format!("{}.json", safe_key))
    }
}

#[async_trait]
impl Storage for FilesystemStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_to_path(key);

        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {:?}", path)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.key_to_path(key);
        let staging = path.with_extension("json.tmp");

        // Staged write, then rename over the old file
        fs::write(&staging, value)
            .await
            .with_context(|| format!("Failed to write {:?}", staging))?;
        fs::rename(&staging, &path)
            .await
            .with_context(|| format!("Failed to move snapshot into {:?}", path))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to delete {:?}", path)),
        }
    }

    fn name(&self) -> &'static str {
        "filesystem"
    }
}
