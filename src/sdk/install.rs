//! Installing component payloads under the SDK root
//!
//! A component is staged in a temporary directory next to its final
//! location and renamed into place once its payload and `component.json`
//! are complete, so an interrupted install never looks installed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::domain::{ApiVersion, ComponentRequest, RemoteComponent, ResolvedComponent};
use crate::error::{Result, catalog, fs};
use crate::hash;

use super::repository;

/// Record written into every installed component directory
pub const COMPONENT_MANIFEST: &str = "component.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledComponent {
    pub path: String,
    pub api_version: ApiVersion,
    pub display_name: String,
    #[serde(default)]
    pub version: String,
    /// Digest of the payload as copied from the repository
    #[serde(default)]
    pub hash: String,
}

impl InstalledComponent {
    pub fn request(&self) -> ComponentRequest {
        ComponentRequest::new(self.path.clone(), self.api_version)
    }

    pub fn to_resolved(&self, location: &Path) -> ResolvedComponent {
        ResolvedComponent {
            display_name: self.display_name.clone(),
            location: dunce::canonicalize(location).unwrap_or_else(|_| location.to_path_buf()),
            version: self.version.clone(),
        }
    }
}

/// Directory a component is installed into
pub fn component_dir(sdk_root: &Path, request: &ComponentRequest) -> PathBuf {
    sdk_root
        .join(&request.name)
        .join(request.api_version.to_string())
}

/// Read the install record of a component directory
///
/// A missing or unreadable record means the component is not installed.
pub fn read_installed(dir: &Path) -> Option<InstalledComponent> {
    let path = dir.join(COMPONENT_MANIFEST);
    let content = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&content) {
        Ok(installed) => Some(installed),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "ignoring unreadable install record");
            None
        }
    }
}

/// Copy a component payload from the repository into `target`
pub fn install_component(
    repository: &Path,
    component: &RemoteComponent,
    target: &Path,
) -> Result<InstalledComponent> {
    let source = repository::archive_dir(repository, component);
    if !source.is_dir() {
        return Err(catalog::resolve_failed(format!(
            "payload for {}@{} not found at {}",
            component.path,
            component.api_version,
            source.display()
        )));
    }

    let parent = target
        .parent()
        .ok_or_else(|| catalog::resolve_failed(format!("invalid target {}", target.display())))?;
    std::fs::create_dir_all(parent).map_err(|e| fs::write_failed(parent, e))?;

    let staging = tempfile::Builder::new()
        .prefix(".staging-")
        .tempdir_in(parent)
        .map_err(|e| fs::write_failed(parent, e))?;

    copy_dir(&source, staging.path())?;

    let installed = InstalledComponent {
        path: component.path.clone(),
        api_version: component.api_version,
        display_name: if component.display_name.is_empty() {
            component.path.clone()
        } else {
            component.display_name.clone()
        },
        version: component.version.clone(),
        hash: hash::hash_directory(staging.path())?,
    };
    let record = staging.path().join(COMPONENT_MANIFEST);
    let json = serde_json::to_string_pretty(&installed)?;
    std::fs::write(&record, json).map_err(|e| fs::write_failed(&record, e))?;

    if target.exists() {
        std::fs::remove_dir_all(target).map_err(|e| fs::write_failed(target, e))?;
    }
    std::fs::rename(staging.path(), target).map_err(|e| fs::write_failed(target, e))?;

    tracing::info!(
        component = %installed.request(),
        location = %target.display(),
        "installed component"
    );
    Ok(installed)
}

fn copy_dir(source: &Path, target: &Path) -> Result<()> {
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(|e| fs::read_failed(source, e))?;
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&destination).map_err(|e| fs::write_failed(&destination, e))?;
        } else {
            if let Some(parent) = destination.parent() {
                std::fs::create_dir_all(parent).map_err(|e| fs::write_failed(parent, e))?;
            }
            std::fs::copy(entry.path(), &destination)
                .map_err(|e| fs::write_failed(&destination, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use crate::test_fixtures::create_temp_dir;

    fn remote(path: &str) -> RemoteComponent {
        RemoteComponent {
            path: path.to_string(),
            api_version: 10,
            display_name: String::new(),
            version: "4.0.10.3".to_string(),
            license: None,
            archive: None,
        }
    }

    #[test]
    fn test_install_copies_payload_and_writes_record() {
        let repo = create_temp_dir();
        let sdk = create_temp_dir();
        let payload = repo.path().join("ets/10/build-tools");
        std::fs::create_dir_all(&payload).unwrap();
        std::fs::write(payload.join("ark"), "compiler").unwrap();

        let request = ComponentRequest::new("ets", 10);
        let target = component_dir(sdk.path(), &request);
        let installed = install_component(repo.path(), &remote("ets"), &target).unwrap();

        assert_eq!(installed.display_name, "ets");
        assert!(installed.hash.starts_with(hash::HASH_PREFIX));
        assert_eq!(
            std::fs::read_to_string(target.join("build-tools/ark")).unwrap(),
            "compiler"
        );
        assert_eq!(read_installed(&target), Some(installed));
    }

    #[test]
    fn test_install_leaves_no_staging_directory() {
        let repo = create_temp_dir();
        let sdk = create_temp_dir();
        std::fs::create_dir_all(repo.path().join("js/10")).unwrap();
        std::fs::write(repo.path().join("js/10/loader.js"), "//").unwrap();

        let target = component_dir(sdk.path(), &ComponentRequest::new("js", 10));
        install_component(repo.path(), &remote("js"), &target).unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(sdk.path().join("js"))
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with('.'))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_install_missing_payload_fails() {
        let repo = create_temp_dir();
        let sdk = create_temp_dir();
        let target = component_dir(sdk.path(), &ComponentRequest::new("native", 10));

        let result = install_component(repo.path(), &remote("native"), &target);

        assert!(matches!(result, Err(SdkError::ResolveFailed { .. })));
        assert!(!target.exists());
    }

    #[test]
    fn test_read_installed_ignores_corrupt_record() {
        let sdk = create_temp_dir();
        std::fs::write(sdk.path().join(COMPONENT_MANIFEST), "{ not json").unwrap();
        assert!(read_installed(sdk.path()).is_none());
    }
}
