//! Scaffold Core - webhook validation and scaffold orchestration
//!
//! This library decides whether webhooks (defaulting, validation, conversion) may be
//! added to an API resource of a scaffolded operator project, and with which
//! parameters, before handing off to a scaffolder that writes the files.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Domain** - `Resource`, `Gvk`, `Webhooks` and their naming rules
//! - **Layer 2: Validation** - `CommandOptions` (raw input) and the ordered
//!   `validate_webhook` chain, which consults a `ProjectConfig`
//! - **Layer 3: Orchestration** - `command::run` drives a `RunOptions`
//!   implementation (`CreateWebhook`) through build, validate, scaffold
//! - **Collaborators** - `ProjectFile` (the `PROJECT` file) and
//!   `WebhookScaffolder` (file rendering), both replaceable behind traits
//!
//! # Example Usage
//!
//! ```ignore
//! use scaffold_core::{command, CommandOptions, CreateWebhook, ProjectFile};
//!
//! let project = ProjectFile::load(&dir)?;
//! let options = CommandOptions {
//!     group: "ship".into(),
//!     version: "v1beta1".into(),
//!     kind: "Frigate".into(),
//!     do_defaulting: true,
//!     ..CommandOptions::default()
//! };
//! let mut cmd = CreateWebhook::new(project, "kb-tools", &dir, options);
//! command::run(&mut cmd)?;
//! cmd.into_config().save(&dir)?;
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod options;
pub mod product;
pub mod resource;
pub mod scaffold;

// Re-export main types for convenience
pub use command::{run, CreateWebhook, RunOptions, Stage};
pub use config::{ProjectConfig, ProjectFile};
pub use error::{ErrorKind, WebhookError};
pub use options::{CommandOptions, DEFAULT_WEBHOOK_VERSION};
pub use product::ProductConfig;
pub use resource::{Gvk, Resource, Webhooks};
pub use scaffold::{Scaffolder, WebhookScaffolder};
