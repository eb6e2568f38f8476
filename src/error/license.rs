//! License store errors

use super::SdkError;

/// Creates a license gate error for the given ids
pub fn not_accepted<I, S>(ids: I) -> SdkError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SdkError::LicenseNotAccepted {
        ids: ids.into_iter().map(Into::into).collect(),
    }
}

/// Creates a license accept failed error
pub fn accept_failed(reason: impl Into<String>) -> SdkError {
    SdkError::LicenseAcceptFailed {
        reason: reason.into(),
    }
}
