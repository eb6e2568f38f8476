//! Install command implementation
//!
//! The installation process:
//! 1. Resolve SDK root, toolchain home and repository locations
//! 2. Open the SDK root and record its settings
//! 3. Run the install orchestrator against the local SDK manager

use crate::cli::Cli;
use crate::config::SdkConfig;
use crate::error::Result;
use crate::operations::install::{InstallOrchestrator, InstallPlan, display};
use crate::sdk::LocalSdk;

/// Run the install command
pub fn run(cli: Cli) -> Result<()> {
    let config = SdkConfig::resolve(cli.sdk_root, cli.node_home, cli.repository)?;
    tracing::debug!(repository = %config.repository.display(), "using component repository");

    let sdk = LocalSdk::open(config)?;
    display::print_header(&sdk.config().sdk_root, &sdk.config().node_home);

    let outcome = InstallOrchestrator::new(&sdk, &sdk, InstallPlan::default()).run()?;
    tracing::info!(
        api_version = outcome.target,
        versions = outcome.versions.len(),
        local = outcome.local_count,
        resolved = outcome.resolution.present_count(),
        requested = outcome.batch.len(),
        recovered = outcome.recovery.is_some(),
        "install finished"
    );

    Ok(())
}
