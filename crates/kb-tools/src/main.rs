//! kb-tools CLI - add webhooks to API resources of an operator project

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use colored::Colorize;
use scaffold_core::command::{self, create_webhook_examples, CreateWebhook};
use scaffold_core::{CommandOptions, ProductConfig, ProjectFile, Resource, DEFAULT_WEBHOOK_VERSION};
use std::path::PathBuf;
use std::process::ExitCode;

/// kb-tools product configuration
#[derive(Clone)]
pub struct KbConfig;

impl ProductConfig for KbConfig {
    fn name(&self) -> &'static str {
        "kb-tools"
    }

    fn display_name(&self) -> &'static str {
        "kb-tools"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for adding webhooks to API resources of an operator project"
    }

    fn project_dir_env(&self) -> &'static str {
        "KB_PROJECT_DIR"
    }

    fn docs_url(&self) -> &'static str {
        "https://book.kubebuilder.io/cronjob-tutorial/webhook-implementation.html"
    }

    fn next_steps(&self, resource: &Resource) -> Vec<String> {
        let mut steps = Vec::new();

        if resource.has_defaulting_webhook() || resource.has_validation_webhook() {
            steps.push(format!(
                "Implement your webhook logic in {}_webhook.go",
                resource.gvk.kind.to_lowercase()
            ));
        }
        if resource.has_conversion_webhook() {
            steps.push(format!(
                "Enable the webhook_in_{}.yaml patch in config/crd/kustomization.yaml",
                resource.plural()
            ));
        }
        steps.push("Run `make manifests` to regenerate the webhook configuration".to_string());
        steps.push("Run `make test` to verify the project still builds".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "kb-tools")]
#[command(version)]
pub struct Args {
    /// Project root holding the PROJECT file (defaults to $KB_PROJECT_DIR, then the current directory)
    #[arg(long = "project-dir", global = true)]
    pub project_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a Kubernetes API or webhook
    #[command(subcommand)]
    Create(CreateCommand),
}

#[derive(Subcommand, Debug)]
pub enum CreateCommand {
    /// Scaffold a webhook for an API resource. You can choose to scaffold defaulting,
    /// validating and (or) conversion webhooks.
    #[command(after_help = create_webhook_examples("kb-tools"))]
    Webhook(WebhookArgs),
}

#[derive(Parser, Debug)]
pub struct WebhookArgs {
    /// resource Group
    #[arg(long, default_value = "")]
    pub group: String,

    /// resource Version
    #[arg(long, default_value = "")]
    pub version: String,

    /// resource Kind
    #[arg(long, default_value = "")]
    pub kind: String,

    /// resource irregular plural form
    #[arg(long, default_value = "")]
    pub plural: String,

    /// version of {Mutating,Validating}WebhookConfigurations to scaffold. Options: [v1, v1beta1]
    #[arg(long = "webhook-version", default_value = DEFAULT_WEBHOOK_VERSION)]
    pub webhook_version: String,

    /// if set, scaffold the defaulting webhook
    #[arg(long)]
    pub defaulting: bool,

    /// if set, scaffold the validating webhook
    #[arg(long = "programmatic-validation")]
    pub programmatic_validation: bool,

    /// if set, scaffold the conversion webhook
    #[arg(long)]
    pub conversion: bool,

    /// attempt to create resource even if it already exists
    #[arg(long)]
    pub force: bool,
}

impl From<WebhookArgs> for CommandOptions {
    fn from(args: WebhookArgs) -> Self {
        CommandOptions {
            group: args.group,
            version: args.version,
            kind: args.kind,
            plural: args.plural,
            webhook_version: args.webhook_version,
            do_defaulting: args.defaulting,
            do_validation: args.programmatic_validation,
            do_conversion: args.conversion,
            force: args.force,
        }
    }
}

/// Clap command with the product's help text
fn cli<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command().about(config.cli_description())
}

fn create_webhook<C: ProductConfig>(config: &C, project_dir: PathBuf, args: WebhookArgs) -> Result<()> {
    println!("{}", config.display_name().cyan().bold());
    let project = ProjectFile::load(&project_dir)?;

    let mut cmd = CreateWebhook::new(project, config.name(), &project_dir, args.into());
    command::run(&mut cmd)?;

    let steps = config.next_steps(cmd.resource());
    let project = cmd.into_config();
    project.save(&project_dir)?;

    println!();
    println!("{}", "Webhook scaffolded".green().bold());
    println!();
    println!("  Next steps");
    println!();
    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }
    println!();
    println!("  {} {}", "Docs:".dimmed(), config.docs_url());

    Ok(())
}

fn main() -> ExitCode {
    let config = KbConfig;
    let args = match Args::from_arg_matches(&cli(&config).get_matches()) {
        Ok(args) => args,
        Err(e) => e.exit(),
    };
    let project_dir = config.project_dir(args.project_dir);

    let result = match args.command {
        Command::Create(CreateCommand::Webhook(webhook_args)) => {
            create_webhook(&config, project_dir, webhook_args)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
