//! Configuration errors

use super::SdkError;

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> SdkError {
    SdkError::InvalidConfiguration {
        message: message.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SdkError {
    SdkError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
