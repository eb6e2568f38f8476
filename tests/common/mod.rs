//! Common test utilities for ohsdk integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Components the installer requests
pub const COMPONENTS: [&str; 5] = ["toolchains", "ets", "js", "native", "previewer"];

struct ComponentEntry {
    name: String,
    api_version: u32,
    license: Option<String>,
}

/// A component repository plus an empty SDK root in a temp directory
pub struct TestSdk {
    /// Temporary directory
    pub temp: TempDir,
    pub repository: PathBuf,
    pub sdk_root: PathBuf,
    pub node_home: PathBuf,
    components: Vec<ComponentEntry>,
    licenses: Vec<(String, String)>,
}

impl TestSdk {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let repository = temp.path().join("repository");
        let sdk_root = temp.path().join("sdk");
        let node_home = temp.path().join("node18");
        std::fs::create_dir_all(&repository).expect("Failed to create repository");
        Self {
            temp,
            repository,
            sdk_root,
            node_home,
            components: Vec::new(),
            licenses: Vec::new(),
        }
    }

    /// Offer one component with a payload
    pub fn add_component(&mut self, name: &str, api_version: u32, license: Option<&str>) {
        let payload = self.repository.join(name).join(api_version.to_string());
        std::fs::create_dir_all(&payload).expect("Failed to create payload directory");
        std::fs::write(payload.join("VERSION"), format!("{name}@{api_version}"))
            .expect("Failed to write payload");
        self.components.push(ComponentEntry {
            name: name.to_string(),
            api_version,
            license: license.map(str::to_string),
        });
    }

    /// Offer every requested component at each version
    pub fn add_default_components(&mut self, versions: &[u32], license: Option<&str>) {
        for api_version in versions {
            for name in COMPONENTS {
                self.add_component(name, *api_version, license);
            }
        }
    }

    pub fn add_license(&mut self, id: &str, text: &str) {
        self.licenses.push((id.to_string(), text.to_string()));
    }

    /// Remove the payload of an advertised component
    pub fn remove_payload(&self, name: &str, api_version: u32) {
        std::fs::remove_dir_all(self.repository.join(name).join(api_version.to_string()))
            .expect("Failed to remove payload");
    }

    /// Write `components.yaml` from the added entries
    pub fn write_manifest(&self) {
        let mut manifest = String::from("components:");
        if self.components.is_empty() {
            manifest.push_str(" []");
        }
        manifest.push('\n');
        for c in &self.components {
            manifest.push_str(&format!(
                "  - path: {}\n    api_version: {}\n    display_name: {} API {}\n",
                c.name, c.api_version, c.name, c.api_version
            ));
            if let Some(license) = &c.license {
                manifest.push_str(&format!("    license: {license}\n"));
            }
        }
        if !self.licenses.is_empty() {
            manifest.push_str("licenses:\n");
            for (id, text) in &self.licenses {
                manifest.push_str(&format!("  - id: {id}\n    text: \"{text}\"\n"));
            }
        }
        std::fs::write(self.repository.join("components.yaml"), manifest)
            .expect("Failed to write manifest");
    }

    pub fn installed(&self, name: &str, api_version: u32) -> bool {
        self.sdk_root
            .join(name)
            .join(api_version.to_string())
            .join("component.json")
            .is_file()
    }

    /// Acceptance records whose file name starts with `prefix`
    pub fn license_records(&self, prefix: &str) -> Vec<PathBuf> {
        let Ok(entries) = std::fs::read_dir(self.sdk_root.join("licenses")) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with(prefix))
            .map(|e| e.path())
            .collect()
    }

    /// Command running the real binary against this SDK
    pub fn cmd(&self) -> Command {
        let mut cmd = ohsdk_cmd();
        cmd.arg(&self.sdk_root)
            .arg(&self.node_home)
            .arg("--repository")
            .arg(&self.repository);
        cmd
    }
}

impl Default for TestSdk {
    fn default() -> Self {
        Self::new()
    }
}

/// The real ohsdk binary with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn ohsdk_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ohsdk").expect("ohsdk binary should be built");
    cmd.env_remove("OHSDK_ROOT")
        .env_remove("OHSDK_NODE_HOME")
        .env_remove("OHSDK_REPOSITORY")
        .env_remove("RUST_LOG");
    cmd
}
