//! `PROJECT` file persistence

use super::{ProjectConfig, ProjectError};
use crate::resource::Resource;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the project configuration file at the project root
pub const PROJECT_FILE: &str = "PROJECT";

/// Project layout version this tool reads and writes
const PROJECT_VERSION: &str = "3";

/// Contents of the `PROJECT` file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    #[serde(default)]
    pub domain: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default)]
    pub repo: String,

    #[serde(default, skip_serializing_if = "crate::resource::is_false")]
    pub multigroup: bool,

    #[serde(default)]
    pub resources: Vec<Resource>,

    pub version: String,

    /// Keys this tool does not interpret (`layout`, `plugins`, ...), kept as-is
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl ProjectFile {
    /// An empty project with the current layout version
    pub fn new(domain: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            project_name: None,
            repo: repo.into(),
            multigroup: false,
            resources: Vec::new(),
            version: PROJECT_VERSION.to_string(),
            extra: BTreeMap::new(),
        }
    }

    /// Parse `PROJECT` file contents
    pub fn from_yaml(content: &str) -> Result<Self> {
        let project: ProjectFile =
            serde_yaml::from_str(content).context("Failed to parse PROJECT file")?;
        if project.version != PROJECT_VERSION {
            anyhow::bail!(
                "Unsupported PROJECT version {:?} (expected {:?})",
                project.version,
                PROJECT_VERSION
            );
        }
        Ok(project)
    }

    /// Read the `PROJECT` file from a project root
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(PROJECT_FILE);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid {}", path.display()))
    }

    /// Write the `PROJECT` file to a project root
    pub fn save(&self, project_dir: &Path) -> Result<()> {
        let path = project_dir.join(PROJECT_FILE);
        let content = serde_yaml::to_string(self).context("Failed to serialize PROJECT file")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

impl ProjectConfig for ProjectFile {
    fn domain(&self) -> &str {
        &self.domain
    }

    fn repository(&self) -> &str {
        &self.repo
    }

    fn is_multi_group(&self) -> bool {
        self.multigroup
    }

    fn resources(&self) -> &[Resource] {
        &self.resources
    }

    fn update_resource(&mut self, resource: &Resource) -> Result<(), ProjectError> {
        match self.resources.iter_mut().find(|r| r.gvk == resource.gvk) {
            Some(existing) => existing.update(resource)?,
            None => self.resources.push(resource.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{Gvk, Webhooks};

    const PROJECT_YAML: &str = "\
domain: my.domain
layout:
- go.kubebuilder.io/v3
projectName: fleet
repo: example.com/fleet
resources:
- api:
    crdVersion: v1
    namespaced: true
  controller: true
  domain: my.domain
  group: ship
  kind: Frigate
  path: example.com/fleet/api/v1beta1
  version: v1beta1
version: \"3\"
";

    #[test]
    fn test_parse_project_file() {
        let project = ProjectFile::from_yaml(PROJECT_YAML).unwrap();
        assert_eq!(project.domain, "my.domain");
        assert_eq!(project.repo, "example.com/fleet");
        assert_eq!(project.project_name.as_deref(), Some("fleet"));
        assert_eq!(project.resources.len(), 1);
        assert_eq!(
            project.resources[0].gvk,
            Gvk::new("ship", "my.domain", "v1beta1", "Frigate")
        );
        assert!(project.extra.contains_key("layout"));
    }

    #[test]
    fn test_unsupported_version() {
        let yaml = "domain: my.domain\nrepo: example.com/fleet\nversion: \"2\"\n";
        let err = ProjectFile::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("Unsupported PROJECT version"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut project = ProjectFile::new("my.domain", "example.com/fleet");
        project
            .extra
            .insert("plugins".to_string(), serde_yaml::Value::Null);
        project
            .resources
            .push(Resource::new(Gvk::new("ship", "my.domain", "v1", "Frigate")));

        project.save(dir.path()).unwrap();
        let loaded = ProjectFile::load(dir.path()).unwrap();
        assert_eq!(loaded, project);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProjectFile::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_update_resource_merges_existing() {
        let mut project = ProjectFile::from_yaml(PROJECT_YAML).unwrap();
        let mut scaffolded = Resource::new(Gvk::new("ship", "my.domain", "v1beta1", "Frigate"));
        scaffolded.webhooks = Some(Webhooks {
            webhook_version: "v1".to_string(),
            defaulting: true,
            ..Webhooks::default()
        });

        project.update_resource(&scaffolded).unwrap();
        assert_eq!(project.resources.len(), 1);
        assert!(project.resources[0].controller);
        assert!(project.resources[0].has_defaulting_webhook());
        assert_eq!(project.committed_webhook_version(), Some("v1"));
    }

    #[test]
    fn test_update_resource_adds_new() {
        let mut project = ProjectFile::new("my.domain", "example.com/fleet");
        let resource = Resource::new(Gvk::new("ship", "my.domain", "v1", "Frigate"));
        project.update_resource(&resource).unwrap();
        assert_eq!(project.resources, vec![resource]);
    }
}
