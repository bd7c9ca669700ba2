use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::RequestOptions;

/// Public character API used when no config overrides it.
pub const DEFAULT_BASE_URL: &str = "https://dattebayo-api.onrender.com";

/// Image shown for characters without any usable image URL.
pub const DEFAULT_IMAGE: &str = "/assets/default.png";

/// Global configuration loaded from `~/.config/shinobi/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShinobiConfig {
    /// Base route of the character API (no trailing `/characters`).
    pub base_url: String,
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Deadline in seconds for a whole request, body included.
    pub request_timeout_secs: u64,
    /// Optional User-Agent header; libcurl default when missing.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Optional fallback image URL; [`DEFAULT_IMAGE`] when missing.
    #[serde(default)]
    pub default_image: Option<String>,
}

impl Default for ShinobiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
            user_agent: None,
            default_image: None,
        }
    }
}

impl ShinobiConfig {
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.request_timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn default_image(&self) -> &str {
        self.default_image.as_deref().unwrap_or(DEFAULT_IMAGE)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("shinobi")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ShinobiConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ShinobiConfig> {
    if !path.exists() {
        let default_cfg = ShinobiConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: ShinobiConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
