// File: folio/src/config.rs
// Purpose: Configuration parsing from folio.toml with environment overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::store::LoadPolicy;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub sync: SyncSection,

    #[serde(default)]
    pub admin: AdminConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

/// Backend connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout; unset means the HTTP client default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Fallback storage as written in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    /// "memory" or "filesystem"
    #[serde(default = "default_storage_backend")]
    pub backend: String,

    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

/// Resolved storage backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Memory,
    Filesystem { path: PathBuf },
}

/// Startup behavior as written in TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSection {
    /// "all-or-nothing" or "per-collection"
    #[serde(default = "default_startup_policy")]
    pub startup_policy: String,
}

/// Admin dashboard settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_login_path")]
    pub login_path: String,

    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,
}

// Default values
fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_base_url() -> String {
    crate::api::http::DEFAULT_BASE_URL.to_string()
}

fn default_storage_backend() -> String {
    "filesystem".to_string()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".folio/storage")
}

fn default_startup_policy() -> String {
    "all-or-nothing".to_string()
}

fn default_login_path() -> String {
    "/admin/login".to_string()
}

fn default_session_cookie() -> String {
    "folio_session".to_string()
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            path: default_storage_path(),
        }
    }
}

impl Default for SyncSection {
    fn default() -> Self {
        Self {
            startup_policy: default_startup_policy(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            session_cookie: default_session_cookie(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl StorageSection {
    /// Convert TOML config to the runtime backend choice
    pub fn to_storage_config(&self) -> Result<StorageConfig> {
        match self.backend.as_str() {
            "memory" => Ok(StorageConfig::Memory),
            "filesystem" => Ok(StorageConfig::Filesystem {
                path: self.path.clone(),
            }),
            other => Err(anyhow::anyhow!("Unknown storage backend: {}", other)),
        }
    }
}

impl SyncSection {
    pub fn load_policy(&self) -> Result<LoadPolicy> {
        match self.startup_policy.as_str() {
            "all-or-nothing" => Ok(LoadPolicy::AllOrNothing),
            "per-collection" => Ok(LoadPolicy::PerCollection),
            other => Err(anyhow::anyhow!("Unknown startup policy: {}", other)),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load from `FOLIO_CONFIG` (default `./folio.toml`), then apply env overrides
    pub fn load_default() -> Result<Self> {
        let path = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| "folio.toml".to_string());
        let mut config = Self::load(path)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Apply `FOLIO_API_URL` and `FOLIO_PORT`
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var("FOLIO_API_URL") {
            self.api.base_url = url;
        }

        if let Ok(port) = std::env::var("FOLIO_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid FOLIO_PORT: {}", port))?;
        }

        Ok(())
    }
}
