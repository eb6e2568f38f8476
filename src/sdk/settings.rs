//! Persisted SDK settings
//!
//! SDK tooling reads `.ohsdk/settings.json` under the SDK root to find the
//! toolchain home it should run with.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::SdkConfig;
use crate::error::{Result, fs};

/// Settings directory under the SDK root
pub const SETTINGS_DIR: &str = ".ohsdk";

/// Settings file name
pub const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkSettings {
    pub node_home: PathBuf,
    pub repository: PathBuf,
}

impl From<&SdkConfig> for SdkSettings {
    fn from(config: &SdkConfig) -> Self {
        Self {
            node_home: config.node_home.clone(),
            repository: config.repository.clone(),
        }
    }
}

pub fn settings_path(sdk_root: &Path) -> PathBuf {
    sdk_root.join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Load the settings saved by a previous run, if any
pub fn load(sdk_root: &Path) -> Option<SdkSettings> {
    let content = std::fs::read_to_string(settings_path(sdk_root)).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save(sdk_root: &Path, settings: &SdkSettings) -> Result<()> {
    let path = settings_path(sdk_root);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| fs::write_failed(parent, e))?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(&path, json).map_err(|e| fs::write_failed(&path, e))
}
