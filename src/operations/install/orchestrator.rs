//! Main orchestrator for install operation
//!
//! Runs one install as a linear sequence of blocking catalog calls:
//!
//! 1. Discover API versions and pick the newest
//! 2. Build the request batch for the fixed component list
//! 3. Resolve the batch
//! 4. If resolving fails, run one license recovery cycle and resolve the
//!    same batch again; a second failure ends the run
//! 5. Report the per-request outcome and the local component count
//!
//! Recovery is attempted for any first-attempt failure, not only license
//! gate failures.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, LicenseStore};
use crate::domain::{ApiVersion, RequestBatch, Resolution};
use crate::error::{Result, SdkError};

use super::display;
use super::licenses::{LicenseResolver, RecoveryReport};
use super::requests::{ComponentRequestBuilder, DEFAULT_COMPONENTS};
use super::versions::{VersionDiscoverer, select_target};

/// Components to request for the target version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub components: Vec<String>,
}

impl Default for InstallPlan {
    fn default() -> Self {
        Self {
            components: DEFAULT_COMPONENTS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Result of a successful install run
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    pub versions: BTreeSet<ApiVersion>,
    pub target: ApiVersion,
    pub batch: RequestBatch,
    /// Outcome of the attempt that succeeded
    pub resolution: Resolution,
    /// Set when the first attempt failed and recovery ran
    pub recovery: Option<RecoveryReport>,
    pub local_count: usize,
}

pub struct InstallOrchestrator<'a> {
    catalog: &'a dyn Catalog,
    licenses: &'a dyn LicenseStore,
    plan: InstallPlan,
}

impl<'a> InstallOrchestrator<'a> {
    pub fn new(
        catalog: &'a dyn Catalog,
        licenses: &'a dyn LicenseStore,
        plan: InstallPlan,
    ) -> Self {
        Self {
            catalog,
            licenses,
            plan,
        }
    }

    pub fn run(&self) -> Result<InstallOutcome> {
        let versions = VersionDiscoverer::new(self.catalog).discover()?;
        let target = select_target(&versions)?;
        display::print_versions(&versions, target);

        let batch = ComponentRequestBuilder::build(self.plan.components.as_slice(), target)?;
        tracing::info!(api_version = target, requests = batch.len(), "resolving components");

        let (resolution, recovery) = self.resolve_with_recovery(&batch)?;
        if resolution.is_empty() {
            return Err(SdkError::EmptyResolution);
        }
        display::print_resolution(&batch, &resolution);

        let local_count = self.catalog.list_local_components()?.len();
        display::print_local_count(local_count);

        Ok(InstallOutcome {
            versions,
            target,
            batch,
            resolution,
            recovery,
            local_count,
        })
    }

    /// Resolve the batch, allowing exactly one license recovery cycle
    fn resolve_with_recovery(
        &self,
        batch: &RequestBatch,
    ) -> Result<(Resolution, Option<RecoveryReport>)> {
        let first_error = match self.catalog.resolve(batch) {
            Ok(resolution) => return Ok((resolution, None)),
            Err(e) => e,
        };

        tracing::warn!(error = %first_error, "first install attempt failed");
        display::print_first_attempt_failed();

        let report = LicenseResolver::new(self.catalog, self.licenses).recover()?;
        let resolution = self.catalog.resolve(batch)?;
        Ok((resolution, Some(report)))
    }
}
