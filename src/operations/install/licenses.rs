//! License recovery after a failed resolve
//!
//! Finds the licenses referenced by the remote catalog, asks the license
//! store which of them are still unaccepted and accepts those in one call.
//! Finding nothing to do is a normal outcome, not an error.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, LicenseStore};
use crate::domain::{LicenseId, RemoteComponent};
use crate::error::Result;

use super::display;

/// What a recovery cycle did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoveryReport {
    /// No remote component references a license
    NoLicensesReferenced,
    /// Every referenced license was already accepted
    AllAccepted,
    /// These licenses were accepted by this cycle
    Accepted { ids: Vec<LicenseId> },
}

pub struct LicenseResolver<'a> {
    catalog: &'a dyn Catalog,
    store: &'a dyn LicenseStore,
}

impl<'a> LicenseResolver<'a> {
    pub fn new(catalog: &'a dyn Catalog, store: &'a dyn LicenseStore) -> Self {
        Self { catalog, store }
    }

    /// Accept every license the remote catalog references that is not yet accepted
    pub fn recover(&self) -> Result<RecoveryReport> {
        let remote = self.catalog.fetch_remote_components()?;
        let license_ids = referenced_licenses(&remote);

        if license_ids.is_empty() {
            display::print_no_remote_licenses();
            return Ok(RecoveryReport::NoLicensesReferenced);
        }
        tracing::debug!(license_count = license_ids.len(), "remote catalog references licenses");

        let unaccepted = self.store.find_unaccepted(&license_ids)?;
        if unaccepted.is_empty() {
            display::print_no_unaccepted_licenses();
            return Ok(RecoveryReport::AllAccepted);
        }

        display::print_accepting_licenses(unaccepted.len());
        self.store.accept(&unaccepted)?;
        display::print_license_acceptance_done();

        let ids = unaccepted.into_iter().map(|license| license.id).collect();
        tracing::info!(?ids, "accepted licenses");
        Ok(RecoveryReport::Accepted { ids })
    }
}

/// Distinct non-blank license ids referenced by the given components
pub fn referenced_licenses(components: &[RemoteComponent]) -> BTreeSet<LicenseId> {
    components
        .iter()
        .filter_map(RemoteComponent::license_id)
        .map(str::to_string)
        .collect()
}
