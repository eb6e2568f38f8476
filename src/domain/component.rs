//! Component types returned by the catalog

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::request::{ApiVersion, ComponentRequest};

/// The catalog's answer for one request that could be located
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedComponent {
    pub display_name: String,
    /// Install location on disk
    pub location: PathBuf,
    /// Component release string, empty when unknown
    pub version: String,
}

/// A component advertised by the remote catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteComponent {
    /// Component name, e.g. `ets`
    pub path: String,
    pub api_version: ApiVersion,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub version: String,
    /// License that must be accepted before install
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Directory holding the component payload, relative to the repository
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<PathBuf>,
}

impl RemoteComponent {
    /// Whether this entry answers the given request
    pub fn matches(&self, request: &ComponentRequest) -> bool {
        self.path == request.name && self.api_version == request.api_version
    }

    /// The referenced license id, ignoring blank values
    pub fn license_id(&self) -> Option<&str> {
        self.license
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Per-request outcome of one resolve call, in batch order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    entries: Vec<(ComponentRequest, Option<ResolvedComponent>)>,
}

impl Resolution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: ComponentRequest, component: Option<ResolvedComponent>) {
        self.entries.push((request, component));
    }

    pub fn get(&self, request: &ComponentRequest) -> Option<&ResolvedComponent> {
        self.entries
            .iter()
            .find(|(r, _)| r == request)
            .and_then(|(_, c)| c.as_ref())
    }

    /// Number of requests that resolved to a component
    pub fn present_count(&self) -> usize {
        self.entries.iter().filter(|(_, c)| c.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
