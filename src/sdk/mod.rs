//! File system backed SDK manager
//!
//! [`LocalSdk`] implements both [`Catalog`] and
//! [`LicenseStore`](crate::catalog::LicenseStore) on top of:
//!
//! - a component repository directory (see [`repository`]) playing the
//!   part of the remote distribution endpoint
//! - the SDK root, where components are installed as
//!   `<name>/<api_version>/` and license acceptances under `licenses/`
//!
//! Resolving refuses the whole batch while any component that still needs
//! to be installed references a license that has not been accepted.

pub mod install;
pub mod licenses;
pub mod local;
pub mod repository;
pub mod settings;

use std::collections::BTreeSet;
use std::path::Path;

use crate::catalog::Catalog;
use crate::config::SdkConfig;
use crate::domain::{
    ApiVersion, ComponentRequest, RemoteComponent, RequestBatch, Resolution, ResolvedComponent,
};
use crate::error::{Result, fs, license};
use crate::progress::InstallProgress;

use self::install::{component_dir, install_component, read_installed};
use self::repository::RepositoryManifest;
use self::settings::SdkSettings;

pub struct LocalSdk {
    config: SdkConfig,
}

impl LocalSdk {
    /// Open the SDK root, creating it and recording its settings
    pub fn open(config: SdkConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.sdk_root)
            .map_err(|e| fs::write_failed(&config.sdk_root, e))?;

        let current = SdkSettings::from(&config);
        match settings::load(&config.sdk_root) {
            Some(previous) if previous == current => {}
            Some(previous) => {
                tracing::info!(
                    previous = %previous.node_home.display(),
                    current = %current.node_home.display(),
                    "updating SDK settings"
                );
                settings::save(&config.sdk_root, &current)?;
            }
            None => settings::save(&config.sdk_root, &current)?,
        }

        Ok(Self { config })
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn sdk_root(&self) -> &Path {
        &self.config.sdk_root
    }

    fn manifest(&self) -> Result<RepositoryManifest> {
        RepositoryManifest::load(&self.config.repository)
    }

    /// Components that must be installed, failing if any is license gated
    fn pending_installs<'m>(
        &self,
        manifest: &'m RepositoryManifest,
        batch: &RequestBatch,
    ) -> Result<Vec<(ComponentRequest, &'m RemoteComponent)>> {
        let mut pending = Vec::new();
        let mut gated = BTreeSet::new();

        for request in batch {
            let Some(remote) = manifest.components.iter().find(|c| c.matches(request)) else {
                tracing::debug!(component = %request, "not offered by repository");
                continue;
            };
            if read_installed(&component_dir(self.sdk_root(), request)).is_some() {
                continue;
            }
            if let Some(id) = remote.license_id() {
                let text = manifest.license_text(id).unwrap_or_default();
                if !licenses::is_accepted(self.sdk_root(), id, text) {
                    gated.insert(id.to_string());
                }
            }
            pending.push((request.clone(), remote));
        }

        if !gated.is_empty() {
            return Err(license::not_accepted(gated));
        }
        Ok(pending)
    }

    fn install_all(&self, pending: &[(ComponentRequest, &RemoteComponent)]) -> Result<()> {
        if pending.is_empty() {
            return Ok(());
        }

        let progress = InstallProgress::new(pending.len() as u64);
        for (request, remote) in pending {
            progress.start_component(&request.to_string());
            let target = component_dir(self.sdk_root(), request);
            if let Err(e) = install_component(&self.config.repository, remote, &target) {
                progress.abandon();
                return Err(e);
            }
            progress.finish_component();
        }
        progress.finish();
        Ok(())
    }
}

impl Catalog for LocalSdk {
    fn discover_versions(&self) -> Result<BTreeSet<ApiVersion>> {
        Ok(self
            .manifest()?
            .components
            .iter()
            .map(|c| c.api_version)
            .collect())
    }

    fn resolve(&self, batch: &RequestBatch) -> Result<Resolution> {
        let manifest = self.manifest()?;
        let pending = self.pending_installs(&manifest, batch)?;
        self.install_all(&pending)?;

        let mut resolution = Resolution::new();
        for request in batch {
            let dir = component_dir(self.sdk_root(), request);
            let component = read_installed(&dir).map(|installed| installed.to_resolved(&dir));
            resolution.push(request.clone(), component);
        }
        Ok(resolution)
    }

    fn fetch_remote_components(&self) -> Result<Vec<RemoteComponent>> {
        Ok(self.manifest()?.components)
    }

    fn list_local_components(&self) -> Result<Vec<(ComponentRequest, ResolvedComponent)>> {
        Ok(local::scan(self.sdk_root()))
    }
}
