//! Error types and handling for ohsdk
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`catalog`]: Component catalog and resolve errors
//! - [`license`]: License store errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod catalog;
pub mod config;
pub mod fs;
pub mod license;

use miette::Diagnostic;
use thiserror::Error;

/// Exit code for a run that finished without error
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for any fatal error without a dedicated code
pub const EXIT_FAILURE: i32 = 1;

/// Exit code when the catalog reports no API versions
pub const EXIT_NO_VERSIONS: i32 = 2;

/// Exit code when the terminal resolve returned nothing
pub const EXIT_EMPTY_RESOLUTION: i32 = 3;

/// Main error type for ohsdk operations
#[derive(Error, Diagnostic, Debug)]
pub enum SdkError {
    // Catalog errors
    #[error("Component catalog unavailable: {reason}")]
    #[diagnostic(
        code(ohsdk::catalog::unavailable),
        help("Check that the component repository exists and contains components.yaml")
    )]
    CatalogUnavailable { reason: String },

    #[error("No API versions returned from sdk manager.")]
    #[diagnostic(
        code(ohsdk::catalog::no_versions),
        help("The component repository does not advertise any API version")
    )]
    NoVersionsAvailable,

    #[error("Failed to resolve components: {reason}")]
    #[diagnostic(code(ohsdk::catalog::resolve_failed))]
    ResolveFailed { reason: String },

    #[error("Install returned empty result.")]
    #[diagnostic(code(ohsdk::catalog::empty_resolution))]
    EmptyResolution,

    // License errors
    #[error("License not accepted: {}", ids.join(", "))]
    #[diagnostic(
        code(ohsdk::license::not_accepted),
        help("Accept the listed licenses before installing the components that reference them")
    )]
    LicenseNotAccepted { ids: Vec<String> },

    #[error("Failed to accept licenses: {reason}")]
    #[diagnostic(code(ohsdk::license::accept_failed))]
    LicenseAcceptFailed { reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(ohsdk::config::invalid))]
    InvalidConfiguration { message: String },

    #[error("Failed to parse manifest: {path}: {reason}")]
    #[diagnostic(code(ohsdk::config::manifest_parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(ohsdk::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(ohsdk::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Logging errors
    #[error("Failed to initialize logging: {reason}")]
    #[diagnostic(code(ohsdk::logging::init_failed))]
    LoggingInitFailed { reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ohsdk::fs::io_error))]
    IoError { message: String },
}

impl SdkError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SdkError::NoVersionsAvailable => EXIT_NO_VERSIONS,
            SdkError::EmptyResolution => EXIT_EMPTY_RESOLUTION,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<std::io::Error> for SdkError {
    fn from(err: std::io::Error) -> Self {
        SdkError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SdkError {
    fn from(err: serde_yaml::Error) -> Self {
        SdkError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SdkError>;
