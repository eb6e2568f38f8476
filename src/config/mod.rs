//! SDK location configuration
//!
//! Every location the installer touches is an explicit [`SdkConfig`] value.
//! Missing values fall back to platform defaults:
//!
//! - SDK root: `<local data dir>/Huawei/Sdk`
//! - toolchain home: `<home>/.ohsdk/node`
//! - component repository: `<cache dir>/ohsdk/repository`
//!
//! The command line layer also reads `OHSDK_ROOT`, `OHSDK_NODE_HOME` and
//! `OHSDK_REPOSITORY` before falling back to these defaults.

use std::path::{Path, PathBuf};

use crate::error::{Result, config};

/// Vendor directory under the local data directory
const SDK_VENDOR_DIR: &str = "Huawei";

/// SDK directory under the vendor directory
const SDK_DIR: &str = "Sdk";

/// Directory name used under home and cache directories
const APP_DIR: &str = "ohsdk";

/// Locations for one install run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Where components are installed
    pub sdk_root: PathBuf,
    /// Node.js runtime used by SDK tooling
    pub node_home: PathBuf,
    /// Component repository to install from
    pub repository: PathBuf,
}

impl SdkConfig {
    /// Build a config from optional overrides, filling gaps with defaults
    pub fn resolve(
        sdk_root: Option<PathBuf>,
        node_home: Option<PathBuf>,
        repository: Option<PathBuf>,
    ) -> Result<Self> {
        let sdk_root = match sdk_root {
            Some(path) => path,
            None => default_sdk_root()?,
        };
        let node_home = match node_home {
            Some(path) => path,
            None => default_node_home()?,
        };
        let repository = match repository {
            Some(path) => path,
            None => default_repository()?,
        };

        Ok(Self {
            sdk_root: absolutize(&sdk_root)?,
            node_home: absolutize(&node_home)?,
            repository: absolutize(&repository)?,
        })
    }
}

pub fn default_sdk_root() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| config::invalid("Could not determine local data directory"))?;
    Ok(base.join(SDK_VENDOR_DIR).join(SDK_DIR))
}

pub fn default_node_home() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| config::invalid("Could not determine home directory"))?;
    Ok(home.join(format!(".{APP_DIR}")).join("node"))
}

pub fn default_repository() -> Result<PathBuf> {
    let base =
        dirs::cache_dir().ok_or_else(|| config::invalid("Could not determine cache directory"))?;
    Ok(base.join(APP_DIR).join("repository"))
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(config::invalid("path must not be empty"));
    }
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
