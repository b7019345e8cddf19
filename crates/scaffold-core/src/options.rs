//! Raw `create webhook` options and the resource built from them

use crate::config::ProjectConfig;
use crate::resource::validation::{self, NameError};
use crate::resource::{Gvk, Resource, Webhooks};
use thiserror::Error;

/// Default mutating/validating webhook configuration API version to scaffold
pub const DEFAULT_WEBHOOK_VERSION: &str = "v1";

/// Options that are not usable as given
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The parser assigned the next flag as this flag's value
    #[error("--{flag} was given a flag as its value ({value:?})")]
    FlagAsValue { flag: &'static str, value: String },

    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error(transparent)]
    Name(#[from] NameError),
}

/// Flags of the `create webhook` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOptions {
    pub group: String,
    pub version: String,
    pub kind: String,
    /// Irregular plural form; empty means the regular plural
    pub plural: String,
    pub webhook_version: String,
    pub do_defaulting: bool,
    pub do_validation: bool,
    pub do_conversion: bool,
    /// Overwrite an existing webhook
    pub force: bool,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            group: String::new(),
            version: String::new(),
            kind: String::new(),
            plural: String::new(),
            webhook_version: DEFAULT_WEBHOOK_VERSION.to_string(),
            do_defaulting: false,
            do_validation: false,
            do_conversion: false,
            force: false,
        }
    }
}

impl CommandOptions {
    /// True when at least one webhook type was requested
    pub fn has_webhook_type(&self) -> bool {
        self.do_defaulting || self.do_validation || self.do_conversion
    }

    /// Check the raw values before they are trusted as a resource identity.
    ///
    /// `domain` is the project domain, needed to judge the qualified group.
    pub fn validate(&self, domain: &str) -> Result<(), OptionError> {
        // None of these accept a leading '-', so one means a flag was swallowed.
        // Checked for every field first so a missing value is not misreported.
        for (flag, value) in [
            ("group", &self.group),
            ("version", &self.version),
            ("kind", &self.kind),
        ] {
            if value.starts_with('-') {
                return Err(OptionError::FlagAsValue {
                    flag,
                    value: value.clone(),
                });
            }
        }

        if self.version.is_empty() {
            return Err(OptionError::Empty("version"));
        }
        if self.kind.is_empty() {
            return Err(OptionError::Empty("kind"));
        }
        if self.has_webhook_type() && self.webhook_version.is_empty() {
            return Err(OptionError::Empty("webhook-version"));
        }

        let gvk = Gvk::new(&self.group, domain, &self.version, &self.kind);
        validation::validate_qualified_group(&gvk.qualified_group())?;
        validation::validate_version(&self.version)?;
        validation::validate_kind(&self.kind)?;
        validation::validate_webhook_version(&self.webhook_version)?;

        Ok(())
    }

    /// Build the resource these options describe.
    ///
    /// Pure construction: nothing is validated or resolved here.
    pub fn new_resource<C: ProjectConfig + ?Sized>(&self, config: &C) -> Resource {
        let mut resource = Resource::new(Gvk::new(
            &self.group,
            config.domain(),
            &self.version,
            &self.kind,
        ));

        if !self.plural.is_empty() {
            resource.plural = Some(self.plural.clone());
        }

        let mut webhooks = Webhooks::default();
        if self.has_webhook_type() {
            resource.path = Some(api_package_path(
                config.repository(),
                &self.group,
                &self.version,
                config.is_multi_group(),
            ));
            webhooks.webhook_version = self.webhook_version.clone();
            webhooks.defaulting = self.do_defaulting;
            webhooks.validation = self.do_validation;
            webhooks.conversion = self.do_conversion;
        }
        resource.webhooks = Some(webhooks);

        resource
    }
}

/// Go import path of the package that holds a group-version's API types
pub fn api_package_path(repository: &str, group: &str, version: &str, multi_group: bool) -> String {
    if multi_group && !group.is_empty() {
        format!("{}/apis/{}/{}", repository, group, version)
    } else {
        format!("{}/api/{}", repository, version)
    }
}
