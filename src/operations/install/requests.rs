//! Request batch construction

use crate::domain::{ApiVersion, ComponentRequest, RequestBatch};
use crate::error::{Result, config};

/// Minimum components needed to build and preview an application
pub const DEFAULT_COMPONENTS: [&str; 5] = ["toolchains", "ets", "js", "native", "previewer"];

/// Builds the request batch for one install run
pub struct ComponentRequestBuilder;

impl ComponentRequestBuilder {
    /// Pair every name with `version`, dropping repeats and keeping first-seen order
    pub fn build<S: AsRef<str>>(names: &[S], version: ApiVersion) -> Result<RequestBatch> {
        if names.is_empty() {
            return Err(config::invalid("component list is empty"));
        }

        let mut batch = RequestBatch::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(config::invalid("component name is blank"));
            }
            if !batch.insert(ComponentRequest::new(name, version)) {
                tracing::debug!(component = name, "skipping duplicate component");
            }
        }

        Ok(batch)
    }
}
