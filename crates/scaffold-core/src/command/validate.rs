//! Validation chain for `create webhook`

use crate::config::ProjectConfig;
use crate::error::WebhookError;
use crate::options::CommandOptions;
use crate::resource::Resource;

/// Check that a webhook may be scaffolded for `resource`.
///
/// Checks run in a fixed order and the first failure is returned:
/// options, resource, webhook type selection, existence of the API,
/// non-duplication (unless forced), project-wide webhook version.
pub fn validate_webhook<C: ProjectConfig + ?Sized>(
    command_name: &str,
    options: &CommandOptions,
    resource: &Resource,
    config: &C,
) -> Result<(), WebhookError> {
    options.validate(config.domain())?;

    resource.validate()?;

    if !resource.has_defaulting_webhook()
        && !resource.has_validation_webhook()
        && !resource.has_conversion_webhook()
    {
        return Err(WebhookError::NoWebhookTypeSelected {
            command: command_name.to_string(),
        });
    }

    // A failed lookup and a missing resource are reported the same way
    let existing =
        config
            .get_resource(&resource.gvk)
            .map_err(|_| WebhookError::ResourceNotFound {
                command: command_name.to_string(),
            })?;
    if existing.has_webhooks() && !options.force {
        return Err(WebhookError::WebhookAlreadyExists);
    }

    let requested = resource.webhook_version();
    if !config.is_webhook_version_compatible(requested) {
        return Err(WebhookError::WebhookVersionConflict {
            requested: requested.to_string(),
        });
    }

    Ok(())
}
