//! Scaffolder for `create webhook`

use super::{templates, write_files, File, Scaffolder};
use crate::config::ProjectConfig;
use crate::resource::Resource;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Writes webhook files for one resource and records its webhooks in the project config
pub struct WebhookScaffolder<'a> {
    config: &'a mut dyn ProjectConfig,
    boilerplate: String,
    resource: Resource,
    /// Overwrite files owned by this resource
    force: bool,
    /// Project root the generated paths are relative to
    root: PathBuf,
}

impl<'a> WebhookScaffolder<'a> {
    pub fn new(
        config: &'a mut dyn ProjectConfig,
        boilerplate: String,
        resource: Resource,
        force: bool,
        root: PathBuf,
    ) -> Self {
        Self {
            config,
            boilerplate,
            resource,
            force,
            root,
        }
    }

    /// The recorded resource with the requested webhooks merged in.
    ///
    /// Carries the recorded plural and CRD version, and fails on a conflicting
    /// record without touching the project config.
    pub fn merged_resource(&self) -> Result<Resource> {
        let mut merged = match self.config.get_resource(&self.resource.gvk) {
            Ok(recorded) => recorded.clone(),
            Err(_) => return Ok(self.resource.clone()),
        };
        merged
            .update(&self.resource)
            .with_context(|| format!("Failed to merge webhooks into {}", self.resource.gvk))?;
        Ok(merged)
    }

    /// Every file this scaffold would write, rendered for `resource`
    fn files_for(&self, resource: &Resource) -> Vec<File> {
        let multi_group = self.config.is_multi_group();
        let mut files = vec![templates::webhook_source(
            resource,
            &self.boilerplate,
            multi_group,
            self.force,
        )];

        if resource.has_defaulting_webhook() || resource.has_validation_webhook() {
            files.extend(templates::webhook_kustomize_files());
        }
        if resource.has_conversion_webhook() {
            files.extend(templates::conversion_patches(resource, self.force));
        }

        files
    }

    /// Every file this scaffold would write
    pub fn files(&self) -> Result<Vec<File>> {
        let merged = self.merged_resource()?;
        Ok(self.files_for(&merged))
    }
}

impl Scaffolder for WebhookScaffolder<'_> {
    fn scaffold(&mut self) -> Result<()> {
        println!(
            "{}",
            format!("Writing webhook scaffold for {}", self.resource.gvk)
                .cyan()
                .bold()
        );

        // Merge before writing so a conflicting record leaves the project untouched
        let merged = self.merged_resource()?;
        let files = self.files_for(&merged);
        write_files(&self.root, &files)?;

        self.config
            .update_resource(&self.resource)
            .context("Failed to record webhooks in the project configuration")?;

        Ok(())
    }
}
