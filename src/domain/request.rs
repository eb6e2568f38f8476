//! Component request types

use std::fmt;

/// Integer identifying an SDK release line
pub type ApiVersion = u32;

/// A single (component, API version) pair to resolve
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentRequest {
    /// Component name, e.g. `toolchains`
    pub name: String,
    pub api_version: ApiVersion,
}

impl ComponentRequest {
    pub fn new(name: impl Into<String>, api_version: ApiVersion) -> Self {
        Self {
            name: name.into(),
            api_version,
        }
    }
}

impl fmt::Display for ComponentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.api_version)
    }
}

/// Ordered set of component requests built for one install run
///
/// Never holds two equal requests; iteration follows first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestBatch {
    requests: Vec<ComponentRequest>,
}

impl RequestBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a request, returning `false` if an equal one is already present
    pub fn insert(&mut self, request: ComponentRequest) -> bool {
        if self.requests.contains(&request) {
            return false;
        }
        self.requests.push(request);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComponentRequest> {
        self.requests.iter()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }
}

impl<'a> IntoIterator for &'a RequestBatch {
    type Item = &'a ComponentRequest;
    type IntoIter = std::slice::Iter<'a, ComponentRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.iter()
    }
}
