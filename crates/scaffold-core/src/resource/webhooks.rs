//! Webhook descriptor attached to a resource

use super::validation::{self, NameError};
use super::MergeError;
use serde::{Deserialize, Serialize};

/// Which webhooks a resource has and the webhook configuration API version they use
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhooks {
    /// `v1` or `v1beta1`; empty until a webhook is scaffolded
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub webhook_version: String,

    #[serde(default, skip_serializing_if = "super::is_false")]
    pub defaulting: bool,

    #[serde(default, skip_serializing_if = "super::is_false")]
    pub validation: bool,

    #[serde(default, skip_serializing_if = "super::is_false")]
    pub conversion: bool,
}

impl Webhooks {
    /// True when no version is set and no webhook type is enabled
    pub fn is_empty(&self) -> bool {
        self.webhook_version.is_empty() && !self.has_any_type()
    }

    /// True when at least one of defaulting, validation or conversion is enabled
    pub fn has_any_type(&self) -> bool {
        self.defaulting || self.validation || self.conversion
    }

    /// An empty version is only valid while no webhook type is enabled
    pub fn validate(&self) -> Result<(), NameError> {
        if self.has_any_type() && self.webhook_version.is_empty() {
            return Err(NameError::WebhookVersion(String::new()));
        }
        validation::validate_webhook_version(&self.webhook_version)
    }

    /// Merge another descriptor into this one.
    ///
    /// An empty version is filled from `other`; two different non-empty versions are
    /// rejected. Webhook types are combined.
    pub fn update(&mut self, other: &Webhooks) -> Result<(), MergeError> {
        if self.webhook_version.is_empty() {
            self.webhook_version = other.webhook_version.clone();
        } else if !other.webhook_version.is_empty()
            && self.webhook_version != other.webhook_version
        {
            return Err(MergeError::WebhookVersion {
                current: self.webhook_version.clone(),
                other: other.webhook_version.clone(),
            });
        }

        self.defaulting |= other.defaulting;
        self.validation |= other.validation;
        self.conversion |= other.conversion;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webhooks(version: &str, defaulting: bool, validation: bool, conversion: bool) -> Webhooks {
        Webhooks {
            webhook_version: version.to_string(),
            defaulting,
            validation,
            conversion,
        }
    }

    #[test]
    fn test_is_empty() {
        assert!(Webhooks::default().is_empty());
        assert!(!webhooks("v1", false, false, false).is_empty());
        assert!(!webhooks("", true, false, false).is_empty());
    }

    #[test]
    fn test_has_any_type() {
        assert!(!webhooks("v1", false, false, false).has_any_type());
        assert!(webhooks("v1", true, false, false).has_any_type());
        assert!(webhooks("v1", false, true, false).has_any_type());
        assert!(webhooks("v1", false, false, true).has_any_type());
    }

    #[test]
    fn test_validate() {
        assert!(Webhooks::default().validate().is_ok());
        assert!(webhooks("v1beta1", true, false, false).validate().is_ok());
        assert!(webhooks("v2", true, false, false).validate().is_err());
        assert_eq!(
            webhooks("", false, true, false).validate(),
            Err(NameError::WebhookVersion(String::new()))
        );
    }

    #[test]
    fn test_update_fills_version_and_combines_types() {
        let mut current = webhooks("", true, false, false);
        current.update(&webhooks("v1", false, false, true)).unwrap();
        assert_eq!(current, webhooks("v1", true, false, true));
    }

    #[test]
    fn test_update_rejects_version_mismatch() {
        let mut current = webhooks("v1", true, false, false);
        let err = current
            .update(&webhooks("v1beta1", false, true, false))
            .unwrap_err();
        assert!(matches!(err, MergeError::WebhookVersion { .. }));
        // Unchanged on failure
        assert_eq!(current, webhooks("v1", true, false, false));
    }

    #[test]
    fn test_yaml_keys() {
        let yaml = serde_yaml::to_string(&webhooks("v1", true, false, false)).unwrap();
        assert!(yaml.contains("webhookVersion: v1"));
        assert!(yaml.contains("defaulting: true"));
        assert!(!yaml.contains("validation"));
    }
}
