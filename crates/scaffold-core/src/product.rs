//! Product configuration trait for CLI binaries
//!
//! Each binary built on this library implements this trait to configure
//! naming, help text and post-scaffold instructions.

use crate::resource::Resource;
use std::path::PathBuf;

/// Configuration trait for CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Binary name (used in messages and usage examples)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Environment variable overriding the project directory
    fn project_dir_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Instructions shown after webhooks were scaffolded for `resource`
    fn next_steps(&self, resource: &Resource) -> Vec<String>;

    /// Project directory: explicit flag, then the environment variable, then the working directory
    fn project_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| std::env::var_os(self.project_dir_env()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
