//! The `create webhook` command

use super::{validate_webhook, RunOptions};
use crate::config::ProjectConfig;
use crate::error::WebhookError;
use crate::options::CommandOptions;
use crate::resource::Resource;
use crate::scaffold::{Scaffolder, WebhookScaffolder};
use std::path::PathBuf;

/// Boilerplate header prepended to generated Go files, relative to the project root
pub const BOILERPLATE_PATH: &str = "hack/boilerplate.go.txt";

/// Usage examples shown in the command help
pub fn create_webhook_examples(command_name: &str) -> String {
    format!(
        "  # Create defaulting and validating webhooks for CRD of group ship, version v1beta1
  # and kind Frigate.
  {cmd} create webhook --group ship --version v1beta1 --kind Frigate --defaulting --programmatic-validation

  # Create conversion webhook for CRD of group ship, version v1beta1 and kind Frigate.
  {cmd} create webhook --group ship --version v1beta1 --kind Frigate --conversion
",
        cmd = command_name
    )
}

/// Adds webhooks to a previously created API resource
pub struct CreateWebhook<C: ProjectConfig> {
    config: C,
    /// Binary name, used in error messages
    command_name: String,
    project_root: PathBuf,
    options: CommandOptions,
    resource: Resource,
}

impl<C: ProjectConfig> CreateWebhook<C> {
    pub fn new(
        config: C,
        command_name: impl Into<String>,
        project_root: impl Into<PathBuf>,
        options: CommandOptions,
    ) -> Self {
        Self {
            config,
            command_name: command_name.into(),
            project_root: project_root.into(),
            options,
            resource: Resource::default(),
        }
    }

    /// The resource built from the options (empty until the command runs)
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Hand back the project configuration, updated when the scaffold succeeded
    pub fn into_config(self) -> C {
        self.config
    }

    fn load_boilerplate(&self) -> Result<String, WebhookError> {
        let path = self.project_root.join(BOILERPLATE_PATH);
        std::fs::read_to_string(&path)
            .map_err(|source| WebhookError::BoilerplateLoadFailure { path, source })
    }
}

impl<C: ProjectConfig> RunOptions for CreateWebhook<C> {
    fn build_resource(&mut self) {
        self.resource = self.options.new_resource(&self.config);
    }

    fn validate(&self) -> Result<(), WebhookError> {
        validate_webhook(&self.command_name, &self.options, &self.resource, &self.config)
    }

    fn get_scaffolder(&mut self) -> Result<Box<dyn Scaffolder + '_>, WebhookError> {
        let boilerplate = self.load_boilerplate()?;

        Ok(Box::new(WebhookScaffolder::new(
            &mut self.config,
            boilerplate,
            self.resource.clone(),
            self.options.force,
            self.project_root.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{run, run_tracked, Stage};
    use crate::config::ProjectFile;
    use crate::error::ErrorKind;
    use crate::resource::Gvk;
    use std::fs;
    use tempfile::TempDir;

    const BOILERPLATE: &str = "/*\nCopyright 2026 The Fleet Authors.\n*/\n";

    /// A project root with a boilerplate file and a declared Frigate API
    fn fixture() -> (TempDir, ProjectFile) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("hack")).unwrap();
        fs::write(dir.path().join(BOILERPLATE_PATH), BOILERPLATE).unwrap();

        let mut project = ProjectFile::new("my.domain", "example.com/fleet");
        let mut frigate = Resource::new(Gvk::new("ship", "my.domain", "v1beta1", "Frigate"));
        frigate.controller = true;
        project.resources.push(frigate);

        (dir, project)
    }

    fn frigate_options() -> CommandOptions {
        CommandOptions {
            group: "ship".to_string(),
            version: "v1beta1".to_string(),
            kind: "Frigate".to_string(),
            do_defaulting: true,
            ..CommandOptions::default()
        }
    }

    #[test]
    fn test_frigate_defaulting_scaffolds_with_default_version() {
        let (dir, project) = fixture();
        let mut cmd = CreateWebhook::new(project, "kb-tools", dir.path(), frigate_options());
        let mut stage = Stage::Start;

        run_tracked(&mut cmd, &mut stage).unwrap();

        assert_eq!(stage, Stage::Done);
        assert_eq!(cmd.resource().webhook_version(), "v1");
        let source = fs::read_to_string(dir.path().join("api/v1beta1/frigate_webhook.go")).unwrap();
        assert!(source.starts_with("/*\nCopyright 2026 The Fleet Authors.\n*/"));

        let config = cmd.into_config();
        assert!(config.resources[0].has_defaulting_webhook());
        assert_eq!(config.committed_webhook_version(), Some("v1"));
    }

    #[test]
    fn test_rerun_without_force_fails() {
        let (dir, project) = fixture();
        let mut first = CreateWebhook::new(project, "kb-tools", dir.path(), frigate_options());
        run(&mut first).unwrap();
        let project = first.into_config();

        let mut second = CreateWebhook::new(project, "kb-tools", dir.path(), frigate_options());
        let mut stage = Stage::Start;
        let err = run_tracked(&mut second, &mut stage).unwrap_err();

        assert!(matches!(err, WebhookError::WebhookAlreadyExists));
        assert_eq!(stage, Stage::Failed(ErrorKind::WebhookAlreadyExists));
    }

    #[test]
    fn test_rerun_with_force_overwrites() {
        let (dir, project) = fixture();
        let mut first = CreateWebhook::new(project, "kb-tools", dir.path(), frigate_options());
        run(&mut first).unwrap();
        let project = first.into_config();

        let forced = CommandOptions {
            do_validation: true,
            force: true,
            ..frigate_options()
        };
        let mut second = CreateWebhook::new(project, "kb-tools", dir.path(), forced);
        run(&mut second).unwrap();

        let source = fs::read_to_string(dir.path().join("api/v1beta1/frigate_webhook.go")).unwrap();
        assert!(source.contains("webhook.Validator"));
        let config = second.into_config();
        assert!(config.resources[0].has_defaulting_webhook());
        assert!(config.resources[0].has_validation_webhook());
    }

    #[test]
    fn test_validation_failure_touches_nothing() {
        let (dir, project) = fixture();
        let options = CommandOptions {
            do_defaulting: false,
            ..frigate_options()
        };
        let mut cmd = CreateWebhook::new(project.clone(), "kb-tools", dir.path(), options);
        let mut stage = Stage::Start;

        let err = run_tracked(&mut cmd, &mut stage).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NoWebhookTypeSelected);
        assert_eq!(stage, Stage::Failed(ErrorKind::NoWebhookTypeSelected));
        assert!(!dir.path().join("api").exists());
        assert_eq!(cmd.into_config(), project);
    }

    #[test]
    fn test_missing_boilerplate() {
        let (dir, project) = fixture();
        fs::remove_file(dir.path().join(BOILERPLATE_PATH)).unwrap();
        let mut cmd = CreateWebhook::new(project, "kb-tools", dir.path(), frigate_options());
        let mut stage = Stage::Start;

        let err = run_tracked(&mut cmd, &mut stage).unwrap_err();

        assert!(matches!(err, WebhookError::BoilerplateLoadFailure { .. }));
        assert!(err.to_string().starts_with("unable to load boilerplate"));
        assert_eq!(stage, Stage::Failed(ErrorKind::BoilerplateLoadFailure));
        assert!(!cmd.config().resources[0].has_webhooks());
    }

    #[test]
    fn test_scaffolder_failure_is_reported() {
        let (dir, project) = fixture();
        // A hand-written webhook file the command must not clobber without --force
        fs::create_dir_all(dir.path().join("api/v1beta1")).unwrap();
        fs::write(dir.path().join("api/v1beta1/frigate_webhook.go"), "edited").unwrap();

        let mut cmd = CreateWebhook::new(project, "kb-tools", dir.path(), frigate_options());
        let mut stage = Stage::Start;
        let err = run_tracked(&mut cmd, &mut stage).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ScaffolderFailure);
        assert!(err.to_string().contains("frigate_webhook.go"));
        assert!(!cmd.config().resources[0].has_webhooks());
    }

    #[test]
    fn test_conflicting_plural_writes_nothing() {
        let (dir, mut project) = fixture();
        project.resources[0].plural = Some("fleet".to_string());
        let options = CommandOptions {
            plural: "ships".to_string(),
            do_defaulting: false,
            do_conversion: true,
            ..frigate_options()
        };
        let mut cmd = CreateWebhook::new(project.clone(), "kb-tools", dir.path(), options);
        let mut stage = Stage::Start;

        let err = run_tracked(&mut cmd, &mut stage).unwrap_err();

        assert_eq!(stage, Stage::Failed(ErrorKind::ScaffolderFailure));
        assert!(err.to_string().starts_with("Failed to merge webhooks"));
        assert!(!dir.path().join("api").exists());
        assert!(!dir.path().join("config").exists());
        assert_eq!(cmd.into_config(), project);
    }

    #[test]
    fn test_examples_use_command_name() {
        let examples = create_webhook_examples("kb-tools");
        assert!(examples.contains("kb-tools create webhook --group ship"));
        assert!(examples.contains("--conversion"));
    }
}
