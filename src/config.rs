use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{API_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_BASE};

/// Client configuration. Resolved from the environment, then
/// `~/.gastos/config.yaml`, then the local development default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base: String::from(DEFAULT_API_BASE),
        }
    }
}

/// On-disk shape; every key optional
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base: Option<String>,
}

impl ClientConfig {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Resolve config from the process environment and the default file
    pub fn load() -> Result<Self> {
        let env_value = std::env::var(API_URL_ENV).ok();
        Self::resolve(env_value.as_deref(), &Self::default_path())
    }

    /// Load from an explicit file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::resolve(None, path)
    }

    fn resolve(env_value: Option<&str>, path: &Path) -> Result<Self> {
        if let Some(url) = non_empty(env_value) {
            tracing::debug!(source = API_URL_ENV, api_base = url, "Using API base");
            return Ok(ClientConfig {
                api_base: url.to_string(),
            });
        }

        if path.exists() {
            let content = fs::read_to_string(path)?;
            let file: ConfigFile = serde_yaml::from_str(&content)?;
            if let Some(url) = non_empty(file.api_base.as_deref()) {
                tracing::debug!(source = %path.display(), api_base = url, "Using API base");
                return Ok(ClientConfig {
                    api_base: url.to_string(),
                });
            }
        }

        Ok(ClientConfig::default())
    }

    /// Save config as YAML, creating the parent directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
