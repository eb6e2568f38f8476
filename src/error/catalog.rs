//! Catalog errors

use super::SdkError;

/// Creates a catalog unavailable error
pub fn unavailable(reason: impl Into<String>) -> SdkError {
    SdkError::CatalogUnavailable {
        reason: reason.into(),
    }
}

/// Creates a resolve failed error
pub fn resolve_failed(reason: impl Into<String>) -> SdkError {
    SdkError::ResolveFailed {
        reason: reason.into(),
    }
}
