//! Configuration loading and management
//!
//! Handles parsing of `.tdo.toml` configuration files and resolution of the
//! task data directory. The data directory is resolved in order:
//! `--data-dir` flag / `TDO_DATA_DIR` env, then `[storage].dir` from the
//! config file, then the platform data directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the optional config file in the working directory
pub const CONFIG_FILE: &str = ".tdo.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the tasks file (overrides the platform default)
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Tasks file name within the data directory
    #[serde(default = "default_file")]
    pub file: String,
}

fn default_file() -> String {
    "tasks.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file: default_file(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address for `tdo serve`
    #[serde(default = "default_addr")]
    pub addr: String,
}

fn default_addr() -> String {
    "127.0.0.1:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

impl Config {
    /// Load `.tdo.toml` from `dir`, falling back to defaults when absent
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the current working directory
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::load_from(&cwd)
    }

    fn validate(&self) -> Result<()> {
        if self.storage.file.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "storage.file must not be empty".to_string(),
            ));
        }
        if self.server.addr.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "server.addr must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the tasks file path, with `data_dir` taking precedence over
    /// the config file and the platform default
    pub fn tasks_file(&self, data_dir: Option<&Path>) -> PathBuf {
        let dir = data_dir
            .map(Path::to_path_buf)
            .or_else(|| self.storage.dir.clone())
            .unwrap_or_else(default_data_dir);
        dir.join(&self.storage.file)
    }
}

/// Platform data directory for tdo, with a local `data/` fallback
fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "tdo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("data"))
}
