//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Provides in-memory [`Catalog`] and [`LicenseStore`] implementations that
//! follow a script and record every call, so tests can assert how often the
//! install pipeline touched each collaborator.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{FakeCatalog, FakeLicenseStore, ResolveStep};
//!
//! let catalog = FakeCatalog::new([8, 9, 10])
//!     .with_resolve_steps([ResolveStep::Fail, ResolveStep::Succeed]);
//! let store = FakeLicenseStore::with_unaccepted(["L1"]);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, VecDeque};
use std::path::PathBuf;

use tempfile::TempDir;

use crate::catalog::{Catalog, LicenseStore};
use crate::domain::{
    ApiVersion, ComponentRequest, License, LicenseId, RemoteComponent, RequestBatch, Resolution,
    ResolvedComponent,
};
use crate::error::{Result, catalog, license};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Scripted answer for one `resolve` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveStep {
    /// Every request resolves
    Succeed,
    /// The named components come back absent, the rest resolve
    SucceedWithout(Vec<String>),
    /// The call returns no entries at all
    SucceedEmpty,
    /// The whole call fails
    Fail,
}

pub struct FakeCatalog {
    versions: Option<BTreeSet<ApiVersion>>,
    steps: RefCell<VecDeque<ResolveStep>>,
    remote: Vec<RemoteComponent>,
    local: Vec<(ComponentRequest, ResolvedComponent)>,
    pub resolved_batches: RefCell<Vec<RequestBatch>>,
    pub remote_fetches: Cell<usize>,
    pub local_listings: Cell<usize>,
}

impl FakeCatalog {
    pub fn new(versions: impl IntoIterator<Item = ApiVersion>) -> Self {
        Self {
            versions: Some(versions.into_iter().collect()),
            steps: RefCell::new(VecDeque::new()),
            remote: Vec::new(),
            local: Vec::new(),
            resolved_batches: RefCell::new(Vec::new()),
            remote_fetches: Cell::new(0),
            local_listings: Cell::new(0),
        }
    }

    /// A catalog whose version discovery fails
    pub fn unreachable() -> Self {
        Self {
            versions: None,
            ..Self::new([])
        }
    }

    #[must_use]
    pub fn with_resolve_steps(self, steps: impl IntoIterator<Item = ResolveStep>) -> Self {
        *self.steps.borrow_mut() = steps.into_iter().collect();
        self
    }

    /// Advertise one remote component per given license reference
    #[must_use]
    pub fn with_remote_licenses<'s>(
        mut self,
        licenses: impl IntoIterator<Item = Option<&'s str>>,
    ) -> Self {
        self.remote = licenses
            .into_iter()
            .enumerate()
            .map(|(i, license)| RemoteComponent {
                path: format!("component-{i}"),
                api_version: 10,
                display_name: String::new(),
                version: String::new(),
                license: license.map(str::to_string),
                archive: None,
            })
            .collect();
        self
    }

    #[must_use]
    pub fn with_local_components(mut self, count: usize) -> Self {
        self.local = (0..count)
            .map(|i| {
                let request = ComponentRequest::new(format!("local-{i}"), 9);
                (request.clone(), resolved_for(&request))
            })
            .collect();
        self
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolved_batches.borrow().len()
    }
}

fn resolved_for(request: &ComponentRequest) -> ResolvedComponent {
    ResolvedComponent {
        display_name: format!("{} display", request.name),
        location: PathBuf::from("/sdk")
            .join(&request.name)
            .join(request.api_version.to_string()),
        version: String::new(),
    }
}

impl Catalog for FakeCatalog {
    fn discover_versions(&self) -> Result<BTreeSet<ApiVersion>> {
        self.versions
            .clone()
            .ok_or_else(|| catalog::unavailable("fake catalog is unreachable"))
    }

    fn resolve(&self, batch: &RequestBatch) -> Result<Resolution> {
        self.resolved_batches.borrow_mut().push(batch.clone());
        let step = self
            .steps
            .borrow_mut()
            .pop_front()
            .unwrap_or(ResolveStep::Fail);

        let absent = match step {
            ResolveStep::Fail => return Err(catalog::resolve_failed("scripted failure")),
            ResolveStep::SucceedEmpty => return Ok(Resolution::new()),
            ResolveStep::Succeed => Vec::new(),
            ResolveStep::SucceedWithout(names) => names,
        };

        let mut resolution = Resolution::new();
        for request in batch {
            let component = (!absent.contains(&request.name)).then(|| resolved_for(request));
            resolution.push(request.clone(), component);
        }
        Ok(resolution)
    }

    fn fetch_remote_components(&self) -> Result<Vec<RemoteComponent>> {
        self.remote_fetches.set(self.remote_fetches.get() + 1);
        Ok(self.remote.clone())
    }

    fn list_local_components(&self) -> Result<Vec<(ComponentRequest, ResolvedComponent)>> {
        self.local_listings.set(self.local_listings.get() + 1);
        Ok(self.local.clone())
    }
}

#[derive(Default)]
pub struct FakeLicenseStore {
    unaccepted: RefCell<BTreeSet<LicenseId>>,
    fail_accept: bool,
    pub lookups: RefCell<Vec<BTreeSet<LicenseId>>>,
    pub accepted_batches: RefCell<Vec<Vec<License>>>,
}

impl FakeLicenseStore {
    pub fn with_unaccepted<'s>(ids: impl IntoIterator<Item = &'s str>) -> Self {
        Self {
            unaccepted: RefCell::new(ids.into_iter().map(str::to_string).collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failing_accept(mut self) -> Self {
        self.fail_accept = true;
        self
    }

    pub fn accept_calls(&self) -> usize {
        self.accepted_batches.borrow().len()
    }
}

impl LicenseStore for FakeLicenseStore {
    fn find_unaccepted(&self, ids: &BTreeSet<LicenseId>) -> Result<Vec<License>> {
        self.lookups.borrow_mut().push(ids.clone());
        let unaccepted = self.unaccepted.borrow();
        Ok(ids
            .iter()
            .filter(|id| unaccepted.contains(*id))
            .map(|id| License::new(id.clone(), format!("text of {id}")))
            .collect())
    }

    fn accept(&self, licenses: &[License]) -> Result<()> {
        self.accepted_batches.borrow_mut().push(licenses.to_vec());
        if self.fail_accept {
            return Err(license::accept_failed("scripted failure"));
        }
        let mut unaccepted = self.unaccepted.borrow_mut();
        for license in licenses {
            unaccepted.remove(&license.id);
        }
        Ok(())
    }
}
