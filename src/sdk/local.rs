//! Discovery of components installed under the SDK root

use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::domain::{ComponentRequest, ResolvedComponent};

use super::install::{COMPONENT_MANIFEST, read_installed};

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Components installed at `<sdk_root>/<name>/<api_version>/`
pub fn scan(sdk_root: &Path) -> Vec<(ComponentRequest, ResolvedComponent)> {
    if !sdk_root.is_dir() {
        return Vec::new();
    }

    WalkDir::new(sdk_root)
        .max_depth(3)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(std::result::Result::ok)
        .filter(|e| e.depth() == 3 && e.file_type().is_file())
        .filter(|e| e.file_name() == COMPONENT_MANIFEST)
        .filter_map(|e| {
            let dir = e.path().parent()?;
            let installed = read_installed(dir)?;
            Some((installed.request(), installed.to_resolved(dir)))
        })
        .collect()
}
