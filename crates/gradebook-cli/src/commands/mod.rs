pub mod add;
pub mod average;
pub mod gpa;
pub mod init;
pub mod menu;
pub mod scores;
pub mod show;

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::config::load_config_from;
use gradebook_core::StudentStore;

/// Where to find the config file and the student directory.
pub struct StorePaths {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

impl StorePaths {
    /// Load the config and open the store it points at.
    pub fn open_store(&self) -> Result<StudentStore> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        tracing::debug!(data_dir = %config.data_dir.display(), "opening student store");
        Ok(StudentStore::from_config(&config))
    }
}

/// Split comma-separated text into raw tokens. Blank input yields none.
pub fn split_list(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }
    input.split(',').map(str::to_string).collect()
}
