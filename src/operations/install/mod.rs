//! Install operation submodules
//!
//! The pipeline, leaves first:
//! - [`versions`]: API version discovery and target selection
//! - [`requests`]: building the request batch for the target version
//! - [`licenses`]: license recovery after a failed resolve
//! - [`orchestrator`]: the install state machine tying them together

pub mod display;
pub mod licenses;
pub mod orchestrator;
pub mod requests;
pub mod versions;

pub use licenses::{LicenseResolver, RecoveryReport};
pub use orchestrator::{InstallOrchestrator, InstallOutcome, InstallPlan};
pub use requests::{ComponentRequestBuilder, DEFAULT_COMPONENTS};
pub use versions::VersionDiscoverer;
