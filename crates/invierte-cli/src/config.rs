//! CLI configuration.
//!
//! One optional TOML file with one setting worth configuring: the API
//! base URL. Resolution order for the URL itself is handled in `main`
//! (flag > `INVIERTE_API_URL` env > config file > default); this module
//! only loads the file layer. A missing file is not an error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Compiled-in default for the collection endpoint.
const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/proyectos/";

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Remote API settings.
    pub api: ApiConfig,
}

/// Remote API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the projects collection endpoint.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from an explicit path or the platform default.
    ///
    /// Missing files yield the defaults; a file that exists but does not
    /// parse is an error worth surfacing.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// The platform config file location (`<config dir>/invierte/config.toml`).
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("invierte").join("config.toml"))
}
