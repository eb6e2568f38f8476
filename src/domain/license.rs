//! License types

/// Opaque license identifier referenced by remote components
pub type LicenseId = String;

/// A license as known to the license store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    pub id: LicenseId,
    /// Full license text; empty when the store has no text for the id
    pub text: String,
}

impl License {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}
