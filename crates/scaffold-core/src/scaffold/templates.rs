//! File templates for webhook scaffolding

use super::{File, IfExists};
use crate::resource::Resource;
use std::path::PathBuf;

/// Directory (relative to the project root) holding a group-version's API types
pub fn api_dir(resource: &Resource, multi_group: bool) -> PathBuf {
    if multi_group && !resource.gvk.group.is_empty() {
        PathBuf::from("apis")
            .join(&resource.gvk.group)
            .join(&resource.gvk.version)
    } else {
        PathBuf::from("api").join(&resource.gvk.version)
    }
}

/// Policy for files owned by a single resource
fn resource_file_policy(force: bool) -> IfExists {
    if force {
        IfExists::Overwrite
    } else {
        IfExists::Error
    }
}

/// Admission webhook path segment (`ship.my.domain`, `v1`, `Frigate` -> `ship-my-domain-v1-frigate`)
fn webhook_path_suffix(resource: &Resource) -> String {
    format!(
        "{}-{}-{}",
        resource.gvk.qualified_group().replace('.', "-"),
        resource.gvk.version,
        resource.gvk.kind.to_lowercase()
    )
}

fn webhook_marker(resource: &Resource, mutating: bool) -> String {
    let lower_kind = resource.gvk.kind.to_lowercase();
    let (prefix, name_prefix) = if mutating {
        ("mutate", "m")
    } else {
        ("validate", "v")
    };
    let versions = if resource.webhook_version() == "v1beta1" {
        "webhookVersions={v1beta1},admissionReviewVersions=v1beta1"
    } else {
        "admissionReviewVersions=v1"
    };

    format!(
        "//+kubebuilder:webhook:path=/{prefix}-{suffix},mutating={mutating},failurePolicy=fail,\
         sideEffects=None,groups={group},resources={plural},verbs=create;update,\
         versions={version},name={name_prefix}{lower_kind}.kb.io,{versions}",
        suffix = webhook_path_suffix(resource),
        group = resource.gvk.qualified_group(),
        plural = resource.plural(),
        version = resource.gvk.version,
    )
}

/// Go source implementing the requested webhooks for one resource
pub fn webhook_source(resource: &Resource, boilerplate: &str, multi_group: bool, force: bool) -> File {
    let kind = &resource.gvk.kind;
    let lower_kind = kind.to_lowercase();
    let log_name = format!("{}log", lower_kind);

    let mut src = String::new();
    if !boilerplate.trim().is_empty() {
        src.push_str(boilerplate.trim_end());
        src.push_str("\n\n");
    }

    src.push_str(&format!("package {}\n", resource.gvk.version));
    src.push('\n');
    src.push_str("import (\n");
    if resource.has_validation_webhook() {
        src.push_str("\t\"k8s.io/apimachinery/pkg/runtime\"\n");
    }
    src.push_str("\tctrl \"sigs.k8s.io/controller-runtime\"\n");
    src.push_str("\tlogf \"sigs.k8s.io/controller-runtime/pkg/log\"\n");
    if resource.has_defaulting_webhook() || resource.has_validation_webhook() {
        src.push_str("\t\"sigs.k8s.io/controller-runtime/pkg/webhook\"\n");
    }
    src.push_str(")\n\n");

    src.push_str("// log is for logging in this package.\n");
    src.push_str(&format!("var {} = logf.Log.WithName(\"{}-resource\")\n", log_name, lower_kind));
    src.push('\n');
    src.push_str(&format!("func (r *{}) SetupWebhookWithManager(mgr ctrl.Manager) error {{\n", kind));
    src.push_str("\treturn ctrl.NewWebhookManagedBy(mgr).\n");
    src.push_str("\t\tFor(r).\n");
    src.push_str("\t\tComplete()\n");
    src.push_str("}\n\n");
    src.push_str("// EDIT THIS FILE!  THIS IS SCAFFOLDING FOR YOU TO OWN!\n");

    if resource.has_defaulting_webhook() {
        src.push('\n');
        src.push_str(&webhook_marker(resource, true));
        src.push_str("\n\n");
        src.push_str(&format!("var _ webhook.Defaulter = &{}{{}}\n", kind));
        src.push('\n');
        src.push_str(
            "// Default implements webhook.Defaulter so a webhook will be registered for the type\n",
        );
        src.push_str(&format!("func (r *{}) Default() {{\n", kind));
        src.push_str(&format!("\t{}.Info(\"default\", \"name\", r.Name)\n", log_name));
        src.push('\n');
        src.push_str("\t// TODO(user): fill in your defaulting logic.\n");
        src.push_str("}\n");
    }

    if resource.has_validation_webhook() {
        src.push('\n');
        src.push_str(&webhook_marker(resource, false));
        src.push_str("\n\n");
        src.push_str(&format!("var _ webhook.Validator = &{}{{}}\n", kind));
        for (method, signature, comment) in [
            ("create", "ValidateCreate()", "object creation"),
            ("update", "ValidateUpdate(old runtime.Object)", "object update"),
            ("delete", "ValidateDelete()", "object deletion"),
        ] {
            src.push('\n');
            let name = signature.split('(').next().unwrap_or(signature);
            src.push_str(&format!("// {} implements webhook.Validator so a webhook will be registered for the type\n", name));
            src.push_str(&format!("func (r *{}) {} error {{\n", kind, signature));
            src.push_str(&format!("\t{}.Info(\"validate {}\", \"name\", r.Name)\n", log_name, method));
            src.push('\n');
            src.push_str(&format!("\t// TODO(user): fill in your validation logic upon {}.\n", comment));
            src.push_str("\treturn nil\n");
            src.push_str("}\n");
        }
    }

    File {
        path: api_dir(resource, multi_group).join(format!("{}_webhook.go", lower_kind)),
        contents: src,
        if_exists: resource_file_policy(force),
    }
}

/// Shared `config/webhook` kustomize files
pub fn webhook_kustomize_files() -> Vec<File> {
    vec![
        File {
            path: PathBuf::from("config/webhook/kustomization.yaml"),
            contents: "resources:\n- manifests.yaml\n- service.yaml\n\nconfigurations:\n- kustomizeconfig.yaml\n"
                .to_string(),
            if_exists: IfExists::Skip,
        },
        File {
            path: PathBuf::from("config/webhook/kustomizeconfig.yaml"),
            contents: "\
# the following config is for teaching kustomize where to look at when substituting vars.
# It requires kustomize v2.1.0 or newer to work properly.
nameReference:
- kind: Service
  version: v1
  fieldSpecs:
  - kind: MutatingWebhookConfiguration
    group: admissionregistration.k8s.io
    path: webhooks/clientConfig/service/name
  - kind: ValidatingWebhookConfiguration
    group: admissionregistration.k8s.io
    path: webhooks/clientConfig/service/name

namespace:
- kind: MutatingWebhookConfiguration
  group: admissionregistration.k8s.io
  path: webhooks/clientConfig/service/namespace
  create: true
- kind: ValidatingWebhookConfiguration
  group: admissionregistration.k8s.io
  path: webhooks/clientConfig/service/namespace
  create: true

varReference:
- path: metadata/annotations
"
            .to_string(),
            if_exists: IfExists::Skip,
        },
        File {
            path: PathBuf::from("config/webhook/service.yaml"),
            contents: "\
apiVersion: v1
kind: Service
metadata:
  name: webhook-service
  namespace: system
spec:
  ports:
    - port: 443
      protocol: TCP
      targetPort: 9443
  selector:
    control-plane: controller-manager
"
            .to_string(),
            if_exists: IfExists::Skip,
        },
    ]
}

/// CRD patches enabling the conversion webhook and CA injection for one resource
pub fn conversion_patches(resource: &Resource, force: bool) -> Vec<File> {
    let plural = resource.plural();
    let crd_name = format!("{}.{}", plural, resource.gvk.qualified_group());
    let crd_version = resource
        .api
        .as_ref()
        .map(|a| a.crd_version.as_str())
        .filter(|v| !v.is_empty())
        .unwrap_or("v1");

    let mut webhook_patch = String::new();
    webhook_patch.push_str("# The following patch enables a conversion webhook for the CRD\n");
    webhook_patch.push_str(&format!("apiVersion: apiextensions.k8s.io/{}\n", crd_version));
    webhook_patch.push_str("kind: CustomResourceDefinition\nmetadata:\n");
    webhook_patch.push_str(&format!("  name: {}\n", crd_name));
    webhook_patch.push_str("spec:\n  conversion:\n    strategy: Webhook\n");
    if crd_version == "v1" {
        webhook_patch.push_str(
            "    webhook:\n      clientConfig:\n        service:\n          namespace: system\n          name: webhook-service\n          path: /convert\n      conversionReviewVersions:\n      - v1\n",
        );
    } else {
        webhook_patch.push_str(
            "    webhookClientConfig:\n      service:\n        namespace: system\n        name: webhook-service\n        path: /convert\n",
        );
    }

    let mut ca_patch = String::new();
    ca_patch.push_str("# The following patch adds a directive for certmanager to inject CA into the CRD\n");
    ca_patch.push_str(&format!("apiVersion: apiextensions.k8s.io/{}\n", crd_version));
    ca_patch.push_str("kind: CustomResourceDefinition\nmetadata:\n  annotations:\n");
    ca_patch.push_str("    cert-manager.io/inject-ca-from: $(CERTIFICATE_NAMESPACE)/$(CERTIFICATE_NAME)\n");
    ca_patch.push_str(&format!("  name: {}\n", crd_name));

    vec![
        File {
            path: PathBuf::from(format!("config/crd/patches/webhook_in_{}.yaml", plural)),
            contents: webhook_patch,
            if_exists: resource_file_policy(force),
        },
        File {
            path: PathBuf::from(format!("config/crd/patches/cainjection_in_{}.yaml", plural)),
            contents: ca_patch,
            if_exists: resource_file_policy(force),
        },
    ]
}
