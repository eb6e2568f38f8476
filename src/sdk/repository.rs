//! Component repository manifest
//!
//! A component repository is a directory holding `components.yaml` and one
//! payload directory per component:
//!
//! ```yaml
//! components:
//!   - path: ets
//!     api_version: 10
//!     display_name: ArkTS
//!     version: 4.0.10.3
//!     license: sdk-license
//!     archive: ets/10
//! licenses:
//!   - id: sdk-license
//!     text: "..."
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::RemoteComponent;
use crate::error::{Result, catalog, config};

/// Manifest file name at the repository root
pub const MANIFEST_FILE: &str = "components.yaml";

/// License text published by the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseEntry {
    pub id: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryManifest {
    #[serde(default)]
    pub components: Vec<RemoteComponent>,
    #[serde(default)]
    pub licenses: Vec<LicenseEntry>,
}

impl RepositoryManifest {
    /// Load the manifest from a repository directory
    pub fn load(repository: &Path) -> Result<Self> {
        let path = repository.join(MANIFEST_FILE);
        if !path.is_file() {
            return Err(catalog::unavailable(format!(
                "no {MANIFEST_FILE} in {}",
                repository.display()
            )));
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| catalog::unavailable(format!("{}: {e}", path.display())))?;
        let manifest: Self = serde_yaml::from_str(&content)
            .map_err(|e| config::parse_failed(path.display().to_string(), e.to_string()))?;

        tracing::debug!(
            components = manifest.components.len(),
            licenses = manifest.licenses.len(),
            "loaded repository manifest"
        );
        Ok(manifest)
    }

    pub fn license_text(&self, id: &str) -> Option<&str> {
        self.licenses
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.text.as_str())
    }
}

/// Payload directory of a component inside the repository
///
/// Defaults to `<path>/<api_version>` when the entry names no archive.
pub fn archive_dir(repository: &Path, component: &RemoteComponent) -> PathBuf {
    match &component.archive {
        Some(archive) => repository.join(archive),
        None => repository
            .join(&component.path)
            .join(component.api_version.to_string()),
    }
}
