//! API resources as recorded in the project configuration
//!
//! This module provides:
//! - Resource identity (`Gvk`) and the webhook descriptor (`Webhooks`)
//! - Naming rules shared by option and resource validation
//! - Default pluralization of kinds

pub mod gvk;
pub mod plural;
pub mod validation;
pub mod webhooks;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use gvk::Gvk;
pub use plural::regular_plural;
pub use validation::NameError;
pub use webhooks::Webhooks;

/// A resource that breaks the naming rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("invalid GVK: {0}")]
    Gvk(NameError),

    #[error("{0}")]
    Plural(NameError),

    #[error("invalid webhooks: {0}")]
    Webhooks(NameError),
}

/// Two resource records that cannot be combined
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("unable to update resource {current} with non-matching resource {other}")]
    Gvk { current: Gvk, other: Gvk },

    #[error("unable to update resource with non-matching plural: {current:?} != {other:?}")]
    Plural { current: String, other: String },

    #[error("webhook versions do not match: {current:?} != {other:?}")]
    WebhookVersion { current: String, other: String },
}

/// CRD-related settings written by the "create api" command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub crd_version: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub namespaced: bool,
}

/// An API resource of the project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(flatten)]
    pub gvk: Gvk,

    /// Irregular plural; the regular plural of the kind is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,

    /// Go import path of the package holding the API types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<Api>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub controller: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<Webhooks>,
}

impl Resource {
    /// Create a bare resource with the given identity
    pub fn new(gvk: Gvk) -> Self {
        Self {
            gvk,
            ..Self::default()
        }
    }

    /// The explicit plural, or the regular plural of the kind
    pub fn plural(&self) -> String {
        match &self.plural {
            Some(plural) if !plural.is_empty() => plural.clone(),
            _ => regular_plural(&self.gvk.kind),
        }
    }

    pub fn has_defaulting_webhook(&self) -> bool {
        self.webhooks.as_ref().is_some_and(|w| w.defaulting)
    }

    pub fn has_validation_webhook(&self) -> bool {
        self.webhooks.as_ref().is_some_and(|w| w.validation)
    }

    pub fn has_conversion_webhook(&self) -> bool {
        self.webhooks.as_ref().is_some_and(|w| w.conversion)
    }

    /// True when a non-empty webhook descriptor is recorded
    pub fn has_webhooks(&self) -> bool {
        self.webhooks.as_ref().is_some_and(|w| !w.is_empty())
    }

    /// Webhook configuration API version, empty when none is set
    pub fn webhook_version(&self) -> &str {
        self.webhooks
            .as_ref()
            .map(|w| w.webhook_version.as_str())
            .unwrap_or("")
    }

    /// Check identity, plural and webhook descriptor against the naming rules
    pub fn validate(&self) -> Result<(), ResourceError> {
        self.gvk.validate().map_err(ResourceError::Gvk)?;
        validation::validate_plural(&self.plural()).map_err(ResourceError::Plural)?;
        if let Some(webhooks) = &self.webhooks {
            webhooks.validate().map_err(ResourceError::Webhooks)?;
        }
        Ok(())
    }

    /// Merge a freshly scaffolded record of the same resource into this one
    pub fn update(&mut self, other: &Resource) -> Result<(), MergeError> {
        if self.gvk != other.gvk {
            return Err(MergeError::Gvk {
                current: self.gvk.clone(),
                other: other.gvk.clone(),
            });
        }

        if let (Some(current), Some(incoming)) = (&self.plural, &other.plural) {
            if current != incoming {
                return Err(MergeError::Plural {
                    current: current.clone(),
                    other: incoming.clone(),
                });
            }
        }

        // Validate the webhook merge before touching anything else
        let webhooks = match (&self.webhooks, &other.webhooks) {
            (Some(current), Some(incoming)) => {
                let mut merged = current.clone();
                merged.update(incoming)?;
                Some(merged)
            }
            (current, incoming) => current.clone().or_else(|| incoming.clone()),
        };

        if self.plural.is_none() {
            self.plural = other.plural.clone();
        }
        if self.path.is_none() {
            self.path = other.path.clone();
        }
        if self.api.is_none() {
            self.api = other.api.clone();
        }
        self.controller |= other.controller;
        self.webhooks = webhooks;

        Ok(())
    }
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
