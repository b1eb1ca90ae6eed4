/// Delivery configuration resolution
///
/// This module turns CLI arguments (and the `TEAMS_WEBHOOK_URL`
/// environment variable, which clap folds into `--webhook-url`) into an
/// immutable `DeliveryConfig` handed to the reporter.
use crate::cli::CliArgs;
use crate::error::NotifyError;
use log::debug;
use std::time::Duration;

/// Where formatted messages go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Print message JSON to stdout
    DryRun,
    /// POST to a Teams incoming webhook
    Webhook { url: String, timeout: Duration },
}

/// Fully resolved delivery settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub target: DeliveryTarget,
}

impl DeliveryConfig {
    pub fn dry_run() -> Self {
        DeliveryConfig { target: DeliveryTarget::DryRun }
    }

    pub fn webhook(url: impl Into<String>, timeout: Duration) -> Self {
        DeliveryConfig { target: DeliveryTarget::Webhook { url: url.into(), timeout } }
    }

    pub fn is_dry_run(&self) -> bool {
        self.target == DeliveryTarget::DryRun
    }
}

/// Build the delivery configuration from CLI arguments
///
/// A webhook URL is only required when the command actually sends
/// something and `--dry-run` is off.
pub fn build_delivery_config(args: &CliArgs) -> Result<DeliveryConfig, NotifyError> {
    args.validate().map_err(NotifyError::InvalidArgument)?;

    if args.dry_run || !args.command.sends_messages() {
        debug!("Messages will be printed, not posted");
        return Ok(DeliveryConfig::dry_run());
    }

    let url = args
        .webhook_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(NotifyError::MissingWebhookUrl)?;

    debug!("Posting to webhook with {}s timeout", args.timeout);
    Ok(DeliveryConfig::webhook(url, Duration::from_secs(args.timeout)))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
