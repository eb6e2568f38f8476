//! Domain types shared by the install pipeline and its collaborators
//!
//! Contains value objects for API versions, component requests and the
//! catalog's answers to them.

pub mod component;
pub mod license;
pub mod request;

pub use component::{RemoteComponent, Resolution, ResolvedComponent};
pub use license::{License, LicenseId};
pub use request::{ApiVersion, ComponentRequest, RequestBatch};
