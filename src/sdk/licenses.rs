//! License acceptance records
//!
//! Accepting a license writes a record under `<sdk_root>/licenses/` holding
//! the hash of the accepted text. A license counts as accepted only while
//! that hash matches the text the repository currently publishes, so a
//! changed license must be accepted again.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::catalog::LicenseStore;
use crate::domain::{License, LicenseId};
use crate::error::{Result, license};
use crate::hash;

use super::LocalSdk;
use super::repository::RepositoryManifest;

/// License record directory under the SDK root
pub const LICENSES_DIR: &str = "licenses";

/// Path of the acceptance record for a license id
///
/// The file name is a readable prefix of the id followed by the id's digest,
/// so every distinct id gets its own record.
pub fn record_path(sdk_root: &Path, id: &str) -> PathBuf {
    let prefix: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let digest = blake3::hash(id.as_bytes()).to_hex();
    sdk_root
        .join(LICENSES_DIR)
        .join(format!("{prefix}-{digest}"))
}

/// Whether the recorded acceptance matches `text`
pub fn is_accepted(sdk_root: &Path, id: &str, text: &str) -> bool {
    std::fs::read_to_string(record_path(sdk_root, id))
        .is_ok_and(|recorded| recorded.lines().any(|line| line.trim() == hash::hash_text(text)))
}

/// License with its repository text, empty when the repository has none
pub fn lookup(manifest: &RepositoryManifest, id: &str) -> License {
    License::new(id, manifest.license_text(id).unwrap_or_default())
}

impl LicenseStore for LocalSdk {
    fn find_unaccepted(&self, ids: &BTreeSet<LicenseId>) -> Result<Vec<License>> {
        let manifest = self.manifest()?;
        Ok(ids
            .iter()
            .map(|id| lookup(&manifest, id))
            .filter(|l| !is_accepted(self.sdk_root(), &l.id, &l.text))
            .collect())
    }

    fn accept(&self, licenses: &[License]) -> Result<()> {
        let dir = self.sdk_root().join(LICENSES_DIR);
        std::fs::create_dir_all(&dir)
            .map_err(|e| license::accept_failed(format!("{}: {e}", dir.display())))?;

        for accepted in licenses {
            let path = record_path(self.sdk_root(), &accepted.id);
            std::fs::write(&path, format!("{}\n", hash::hash_text(&accepted.text)))
                .map_err(|e| license::accept_failed(format!("{}: {e}", path.display())))?;
            tracing::debug!(license = %accepted.id, "recorded license acceptance");
        }
        Ok(())
    }
}
