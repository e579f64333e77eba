//! gradebook configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_ID_ATTEMPTS;

/// Name of the config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "gradebook.toml";

/// Environment variable overriding `data_dir`.
pub const DATA_DIR_ENV: &str = "GRADEBOOK_DATA_DIR";

/// Top-level gradebook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Directory holding one JSON file per student.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Random draws before generated-ID selection falls back to a scan.
    #[serde(default = "default_id_attempts")]
    pub id_attempts: u32,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("student")
}
fn default_id_attempts() -> u32 {
    DEFAULT_ID_ATTEMPTS
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            id_attempts: default_id_attempts(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without an explicit path:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// `GRADEBOOK_DATA_DIR` overrides `data_dir` in every case.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradebookConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<GradebookConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
