//! Error type for report parsing, configuration and webhook delivery.
//!
//! Message formatting itself cannot fail; everything here comes from the
//! I/O wrappers around it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    /// The report file could not be read
    #[error("Failed to read CTRF report {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report file is not valid CTRF JSON
    #[error("Failed to parse CTRF report {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No webhook URL configured. Set TEAMS_WEBHOOK_URL or pass --webhook-url")]
    MissingWebhookUrl,

    #[error("{0}")]
    InvalidArgument(String),

    /// The webhook answered with a non-success status
    #[error("Webhook returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never got an HTTP response
    #[error("Failed to reach webhook: {0}")]
    Transport(String),

    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] serde_json::Error),
}
