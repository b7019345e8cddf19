//! Project configuration
//!
//! `ProjectConfig` is the context object threaded through validation and
//! scaffolding. `ProjectFile` implements it on top of the `PROJECT` YAML file.

pub mod project;

use crate::resource::{Gvk, MergeError, Resource};
use thiserror::Error;

pub use project::{ProjectFile, PROJECT_FILE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("resource {0} not found in project")]
    ResourceNotFound(Gvk),

    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Durable project state: the declared resources and project-wide settings
pub trait ProjectConfig {
    /// Domain all API groups live under
    fn domain(&self) -> &str;

    /// Go module path of the project
    fn repository(&self) -> &str;

    /// Whether API packages are laid out per group
    fn is_multi_group(&self) -> bool;

    /// Every resource declared so far
    fn resources(&self) -> &[Resource];

    /// Record a scaffolded resource, merging it into an existing entry with the same GVK
    fn update_resource(&mut self, resource: &Resource) -> Result<(), ProjectError>;

    /// Look up a previously declared resource
    fn get_resource(&self, gvk: &Gvk) -> Result<&Resource, ProjectError> {
        self.resources()
            .iter()
            .find(|r| &r.gvk == gvk)
            .ok_or_else(|| ProjectError::ResourceNotFound(gvk.clone()))
    }

    /// The webhook version some resource has already committed the project to
    fn committed_webhook_version(&self) -> Option<&str> {
        self.resources()
            .iter()
            .filter_map(|r| r.webhooks.as_ref())
            .find(|w| !w.is_empty() && !w.webhook_version.is_empty())
            .map(|w| w.webhook_version.as_str())
    }

    /// All resources must share one webhook version
    fn is_webhook_version_compatible(&self, version: &str) -> bool {
        self.resources()
            .iter()
            .filter_map(|r| r.webhooks.as_ref())
            .filter(|w| !w.is_empty() && !w.webhook_version.is_empty())
            .all(|w| w.webhook_version == version)
    }
}
