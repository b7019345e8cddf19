//! Group-Version-Kind identity of an API resource

use super::validation::{self, NameError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an API resource within a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gvk {
    /// API group (empty for the core group)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub group: String,

    /// Project domain the group lives under
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub domain: String,

    pub version: String,

    pub kind: String,
}

impl Gvk {
    pub fn new(
        group: impl Into<String>,
        domain: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            domain: domain.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Group joined with the domain (`ship` + `my.domain` -> `ship.my.domain`)
    pub fn qualified_group(&self) -> String {
        match (self.group.is_empty(), self.domain.is_empty()) {
            (true, _) => self.domain.clone(),
            (false, true) => self.group.clone(),
            (false, false) => format!("{}.{}", self.group, self.domain),
        }
    }

    /// Check every component against the naming rules
    pub fn validate(&self) -> Result<(), NameError> {
        validation::validate_qualified_group(&self.qualified_group())?;
        validation::validate_version(&self.version)?;
        validation::validate_kind(&self.kind)?;
        Ok(())
    }
}

impl fmt::Display for Gvk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}, Kind={}",
            self.qualified_group(),
            self.version,
            self.kind
        )
    }
}
