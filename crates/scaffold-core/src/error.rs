//! Failures of the `create webhook` command

use crate::options::OptionError;
use crate::resource::ResourceError;
use std::path::PathBuf;
use thiserror::Error;

/// Every way a `create webhook` invocation can fail. All of them are terminal.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error(transparent)]
    InvalidOption(#[from] OptionError),

    #[error("invalid resource: {0}")]
    InvalidResource(#[from] ResourceError),

    #[error(
        "{command} create webhook requires at least one of --defaulting, \
         --programmatic-validation and --conversion to be true"
    )]
    NoWebhookTypeSelected { command: String },

    #[error("{command} create webhook requires a previously created API")]
    ResourceNotFound { command: String },

    #[error("webhook resource already exists")]
    WebhookAlreadyExists,

    #[error("only one webhook version can be used for all resources, cannot add {requested:?}")]
    WebhookVersionConflict { requested: String },

    #[error("unable to load boilerplate from {}: {source}", .path.display())]
    BoilerplateLoadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    ScaffolderFailure(anyhow::Error),
}

/// Discriminant of a `WebhookError`, for reporting where a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidOption,
    InvalidResource,
    NoWebhookTypeSelected,
    ResourceNotFound,
    WebhookAlreadyExists,
    WebhookVersionConflict,
    BoilerplateLoadFailure,
    ScaffolderFailure,
}

impl WebhookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WebhookError::InvalidOption(_) => ErrorKind::InvalidOption,
            WebhookError::InvalidResource(_) => ErrorKind::InvalidResource,
            WebhookError::NoWebhookTypeSelected { .. } => ErrorKind::NoWebhookTypeSelected,
            WebhookError::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            WebhookError::WebhookAlreadyExists => ErrorKind::WebhookAlreadyExists,
            WebhookError::WebhookVersionConflict { .. } => ErrorKind::WebhookVersionConflict,
            WebhookError::BoilerplateLoadFailure { .. } => ErrorKind::BoilerplateLoadFailure,
            WebhookError::ScaffolderFailure(_) => ErrorKind::ScaffolderFailure,
        }
    }
}
