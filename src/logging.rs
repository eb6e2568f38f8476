//! Diagnostic logging setup
//!
//! Progress lines go to stdout; diagnostics go through `tracing` to stderr.
//! The level is controlled by `RUST_LOG`:
//! - RUST_LOG=ohsdk=debug ohsdk   (verbose logging)
//! - RUST_LOG=ohsdk=info ohsdk    (installs and license acceptances)
//!
//! Without `RUST_LOG` only warnings are shown; `--verbose` forces debug.

use tracing_subscriber::EnvFilter;

use crate::error::{Result, SdkError};

const DEFAULT_FILTER: &str = "ohsdk=warn";
const VERBOSE_FILTER: &str = "ohsdk=debug";

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to stderr
pub fn init(verbose: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| SdkError::LoggingInitFailed {
            reason: e.to_string(),
        })
}
