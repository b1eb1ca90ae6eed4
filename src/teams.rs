/// Microsoft Teams webhook delivery
///
/// This module handles:
/// - Serializing a formatted message to JSON
/// - POSTing it to the configured incoming webhook
/// - Printing it instead when running with `--dry-run`
use crate::config::{DeliveryConfig, DeliveryTarget};
use crate::error::NotifyError;
use crate::format::Notification;
use log::{debug, info};
use std::time::Duration;

const USER_AGENT: &str = concat!("teams-ctrf/", env!("CARGO_PKG_VERSION"), " (https://github.com/ctrf-io/teams-ctrf)");

/// Deliver one message according to the configuration
pub fn send_teams_message(config: &DeliveryConfig, message: &Notification) -> Result<(), NotifyError> {
    let body = serde_json::to_value(message)?;

    match &config.target {
        DeliveryTarget::DryRun => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        DeliveryTarget::Webhook { url, timeout } => {
            debug!("posting {} to webhook", message.kind());
            http_post_json(url, &body, *timeout)?;
            info!("Message sent to Teams");
            Ok(())
        }
    }
}

/// POST a JSON body, mapping non-2xx responses and transport failures
pub fn http_post_json(url: &str, body: &serde_json::Value, timeout: Duration) -> Result<(), NotifyError> {
    let result = ureq::post(url)
        .set("User-Agent", USER_AGENT)
        .set("Content-Type", "application/json")
        .timeout(timeout)
        .send_json(body);

    match result {
        Ok(resp) => {
            debug!("webhook responded {} {}", resp.status(), resp.status_text());
            Ok(())
        }
        Err(ureq::Error::Status(status, resp)) => {
            let body = resp.into_string().unwrap_or_default();
            Err(NotifyError::Http { status, body })
        }
        Err(ureq::Error::Transport(transport)) => Err(NotifyError::Transport(transport.to_string())),
    }
}
