//! Collaborator interfaces consumed by the install pipeline
//!
//! The install pipeline never talks to a concrete SDK manager. It drives two
//! traits instead:
//!
//! - [`Catalog`]: API version discovery, component resolution and the remote
//!   component listing used to find referenced licenses
//! - [`LicenseStore`]: lookup and acceptance of licenses
//!
//! Both are plain public extension points. An implementation exposes
//! `fetch_remote_components`, `find_unaccepted` and `accept` directly; no
//! privileged access into the SDK manager is needed.
//!
//! All calls are blocking. Timeouts, if any, belong to the implementation.
//!
//! ## Implementing a catalog
//!
//! ```ignore
//! use std::collections::BTreeSet;
//! use crate::catalog::Catalog;
//! use crate::domain::{ApiVersion, ComponentRequest, RemoteComponent, RequestBatch, Resolution, ResolvedComponent};
//! use crate::error::Result;
//!
//! struct EmptyCatalog;
//!
//! impl Catalog for EmptyCatalog {
//!     fn discover_versions(&self) -> Result<BTreeSet<ApiVersion>> {
//!         Ok(BTreeSet::new())
//!     }
//!
//!     fn resolve(&self, batch: &RequestBatch) -> Result<Resolution> {
//!         let mut resolution = Resolution::new();
//!         for request in batch {
//!             resolution.push(request.clone(), None);
//!         }
//!         Ok(resolution)
//!     }
//!
//!     fn fetch_remote_components(&self) -> Result<Vec<RemoteComponent>> {
//!         Ok(Vec::new())
//!     }
//!
//!     fn list_local_components(&self) -> Result<Vec<(ComponentRequest, ResolvedComponent)>> {
//!         Ok(Vec::new())
//!     }
//! }
//! ```

use std::collections::BTreeSet;

use crate::domain::{
    ApiVersion, ComponentRequest, License, LicenseId, RemoteComponent, RequestBatch, Resolution,
    ResolvedComponent,
};
use crate::error::Result;

/// SDK component catalog
pub trait Catalog {
    /// All API versions the catalog knows about.
    ///
    /// Fails with `CatalogUnavailable` when the catalog cannot be reached.
    /// An empty set is a valid answer.
    fn discover_versions(&self) -> Result<BTreeSet<ApiVersion>>;

    /// Resolve every request in the batch, downloading as needed.
    ///
    /// Returns one entry per request in batch order. A request that could
    /// not be located is reported as `None` rather than failing the call;
    /// a failure of the whole call (license gate, transport) is an error.
    fn resolve(&self, batch: &RequestBatch) -> Result<Resolution>;

    /// Components currently advertised by the remote catalog
    fn fetch_remote_components(&self) -> Result<Vec<RemoteComponent>>;

    /// Components already installed under the SDK root
    fn list_local_components(&self) -> Result<Vec<(ComponentRequest, ResolvedComponent)>>;
}

/// Persistent record of accepted licenses
pub trait LicenseStore {
    /// Licenses among `ids` that have not been accepted yet
    fn find_unaccepted(&self, ids: &BTreeSet<LicenseId>) -> Result<Vec<License>>;

    /// Accept all given licenses in one call.
    ///
    /// Fails with `LicenseAcceptFailed`.
    fn accept(&self, licenses: &[License]) -> Result<()>;
}
