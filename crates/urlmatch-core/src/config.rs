use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::DEFAULT_SIMILARITY_THRESHOLD;

/// Global configuration loaded from `~/.config/urlmatch/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlMatchConfig {
    /// Exclusive minimum score for a partial match. Not range-checked.
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,
    /// Directory that receives report files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_threshold() -> f64 {
    DEFAULT_SIMILARITY_THRESHOLD
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for UrlMatchConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_threshold(),
            output_dir: default_output_dir(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlmatch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlMatchConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UrlMatchConfig> {
    if !path.exists() {
        let default_cfg = UrlMatchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: UrlMatchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
