//! Configuration management for hop.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the configuration file looked up at the repository root.
pub const CONFIG_FILE: &str = ".hop.toml";

/// hop configuration loaded from .hop.toml at the repository root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Load config from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    /// Returns error if the file exists but can't be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from the conventional location under a repository root.
    ///
    /// # Errors
    /// Returns error if the file exists but can't be read or parsed.
    pub fn load_from_root(root: impl AsRef<Path>) -> Result<Self> {
        Self::load(root.as_ref().join(CONFIG_FILE))
    }
}

/// General hop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Branch treated as the main line of development.
    #[serde(default = "default_main_branch")]
    pub main_branch: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            main_branch: default_main_branch(),
        }
    }
}

fn default_main_branch() -> String {
    "master".into()
}
