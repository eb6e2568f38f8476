//! API version discovery

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::domain::ApiVersion;
use crate::error::{Result, SdkError};

/// Asks the catalog which API versions exist
pub struct VersionDiscoverer<'a> {
    catalog: &'a dyn Catalog,
}

impl<'a> VersionDiscoverer<'a> {
    pub fn new(catalog: &'a dyn Catalog) -> Self {
        Self { catalog }
    }

    pub fn discover(&self) -> Result<BTreeSet<ApiVersion>> {
        let versions = self.catalog.discover_versions()?;
        tracing::debug!(count = versions.len(), "discovered API versions");
        Ok(versions)
    }
}

/// Pick the newest API version
pub fn select_target(versions: &BTreeSet<ApiVersion>) -> Result<ApiVersion> {
    versions
        .last()
        .copied()
        .ok_or(SdkError::NoVersionsAvailable)
}
