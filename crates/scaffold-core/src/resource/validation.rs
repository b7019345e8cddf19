//! Naming rules for API groups, versions, kinds and plurals

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Pattern every resource version must match
pub const VERSION_PATTERN: &str = r"^v\d+(?:alpha\d+|beta\d+)?$";

/// Webhook configuration API versions that can be scaffolded
pub const WEBHOOK_VERSIONS: &[&str] = &["v1", "v1beta1"];

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;
const DNS1035_LABEL_MAX_LENGTH: usize = 63;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"));

static DNS1123_SUBDOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{label}(\.{label})*$",
        label = DNS1123_LABEL_FMT
    ))
    .expect("subdomain pattern is valid")
});

static DNS1035_LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[a-z]([-a-z0-9]*[a-z0-9])?$").expect("label pattern is valid")
});

/// A name that breaks one of the naming rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("either Group or Domain is invalid: {}", .0.join("; "))]
    Group(Vec<String>),

    #[error(r"Version must match ^v\d+(?:alpha\d+|beta\d+)?$ (was {0})")]
    Version(String),

    #[error("invalid Kind: {}", .0.join("; "))]
    Kind(Vec<String>),

    #[error("invalid plural {plural:?}: {}", .reasons.join("; "))]
    Plural { plural: String, reasons: Vec<String> },

    #[error("Webhook version must be one of: v1, v1beta1 (was {0:?})")]
    WebhookVersion(String),
}

/// Check a value against the DNS-1123 subdomain rules, returning every violation
pub fn is_dns1123_subdomain(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errs.push(format!(
            "must be no more than {} characters",
            DNS1123_SUBDOMAIN_MAX_LENGTH
        ));
    }
    if !DNS1123_SUBDOMAIN_REGEX.is_match(value) {
        errs.push(
            "a DNS-1123 subdomain must consist of lower case alphanumeric characters, '-' or '.', \
             and must start and end with an alphanumeric character"
                .to_string(),
        );
    }
    errs
}

/// Check a value against the DNS-1035 label rules, returning every violation
pub fn is_dns1035_label(value: &str) -> Vec<String> {
    let mut errs = Vec::new();
    if value.len() > DNS1035_LABEL_MAX_LENGTH {
        errs.push(format!(
            "must be no more than {} characters",
            DNS1035_LABEL_MAX_LENGTH
        ));
    }
    if !DNS1035_LABEL_REGEX.is_match(value) {
        errs.push(
            "a DNS-1035 label must consist of lower case alphanumeric characters or '-', \
             start with an alphabetic character, and end with an alphanumeric character"
                .to_string(),
        );
    }
    errs
}

/// Validate a fully qualified group (`<group>.<domain>`)
pub fn validate_qualified_group(qualified_group: &str) -> Result<(), NameError> {
    let errs = is_dns1123_subdomain(qualified_group);
    if errs.is_empty() {
        Ok(())
    } else {
        Err(NameError::Group(errs))
    }
}

pub fn validate_version(version: &str) -> Result<(), NameError> {
    if VERSION_REGEX.is_match(version) {
        Ok(())
    } else {
        Err(NameError::Version(version.to_string()))
    }
}

/// Kinds must start with an uppercase character and be a DNS-1035 label once lowercased
pub fn validate_kind(kind: &str) -> Result<(), NameError> {
    let mut errs = Vec::new();

    match kind.chars().next() {
        Some(first) if first.is_uppercase() => {}
        Some(_) => errs.push("kind must start with an uppercase character".to_string()),
        None => errs.push("kind cannot be empty".to_string()),
    }
    if !kind.is_empty() {
        errs.extend(is_dns1035_label(&kind.to_lowercase()));
    }

    if errs.is_empty() {
        Ok(())
    } else {
        Err(NameError::Kind(errs))
    }
}

pub fn validate_plural(plural: &str) -> Result<(), NameError> {
    let errs = is_dns1035_label(plural);
    if errs.is_empty() {
        Ok(())
    } else {
        Err(NameError::Plural {
            plural: plural.to_string(),
            reasons: errs,
        })
    }
}

/// Empty means "not chosen yet" and is accepted; anything else must be a known version
pub fn validate_webhook_version(version: &str) -> Result<(), NameError> {
    if version.is_empty() || WEBHOOK_VERSIONS.contains(&version) {
        Ok(())
    } else {
        Err(NameError::WebhookVersion(version.to_string()))
    }
}
