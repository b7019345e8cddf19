//! Command orchestration
//!
//! A command is driven through a fixed sequence of stages:
//!
//! `Start -> OptionsBound -> ResourceBuilt -> Validated -> ScaffolderAcquired -> Done`
//!
//! Any failure moves the run to `Failed(kind)` and stops it. A scaffolder is only
//! acquired after validation passed, and it is run at most once.

pub mod validate;
pub mod webhook;

use crate::error::{ErrorKind, WebhookError};
use crate::scaffold::Scaffolder;

pub use validate::validate_webhook;
pub use webhook::{create_webhook_examples, CreateWebhook, BOILERPLATE_PATH};

/// Where a command run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    OptionsBound,
    ResourceBuilt,
    Validated,
    ScaffolderAcquired,
    Done,
    Failed(ErrorKind),
}

/// Hooks a command implements to be driven by [`run`]
pub trait RunOptions {
    /// Turn the bound options into the resource to scaffold
    fn build_resource(&mut self);

    /// Decide whether scaffolding may proceed
    fn validate(&self) -> Result<(), WebhookError>;

    /// Create the scaffolder for the validated resource
    fn get_scaffolder(&mut self) -> Result<Box<dyn Scaffolder + '_>, WebhookError>;

    /// Runs after a successful scaffold
    fn post_scaffold(&mut self) -> Result<(), WebhookError> {
        Ok(())
    }
}

/// Drive a command with bound options to completion
pub fn run<R: RunOptions + ?Sized>(cmd: &mut R) -> Result<(), WebhookError> {
    let mut stage = Stage::Start;
    run_tracked(cmd, &mut stage)
}

/// Like [`run`], recording the stage reached in `stage`
pub fn run_tracked<R: RunOptions + ?Sized>(
    cmd: &mut R,
    stage: &mut Stage,
) -> Result<(), WebhookError> {
    let result = drive(cmd, stage);
    if let Err(err) = &result {
        *stage = Stage::Failed(err.kind());
    }
    result
}

fn drive<R: RunOptions + ?Sized>(cmd: &mut R, stage: &mut Stage) -> Result<(), WebhookError> {
    // Options are bound by the time a command is handed over
    *stage = Stage::OptionsBound;

    cmd.build_resource();
    *stage = Stage::ResourceBuilt;

    cmd.validate()?;
    *stage = Stage::Validated;

    {
        let mut scaffolder = cmd.get_scaffolder()?;
        *stage = Stage::ScaffolderAcquired;

        scaffolder
            .scaffold()
            .map_err(WebhookError::ScaffolderFailure)?;
    }

    cmd.post_scaffold()?;
    *stage = Stage::Done;

    Ok(())
}
