//! Rendering and writing of generated files
//!
//! This module provides:
//! - The `Scaffolder` trait the command orchestrator drives
//! - File templates for webhooks (Go source, kustomize manifests, CRD patches)
//! - A writer that applies per-file "if exists" policies

pub mod templates;
pub mod webhook;
pub mod writer;

use std::path::PathBuf;

pub use webhook::WebhookScaffolder;
pub use writer::write_files;

/// Generates files for a validated command
pub trait Scaffolder {
    /// Render and write every file, then record the result in the project configuration
    fn scaffold(&mut self) -> anyhow::Result<()>;
}

/// What to do when a file about to be written already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfExists {
    /// Keep the existing file (shared, project-wide files)
    Skip,
    /// Refuse to scaffold
    Error,
    /// Replace the existing file
    Overwrite,
}

/// A rendered file, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub path: PathBuf,
    pub contents: String,
    pub if_exists: IfExists,
}
