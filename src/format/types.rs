//! Message type definitions for the rendering model.
//!
//! This module defines the documents handed to the Teams webhook and the
//! static presentation tables the formatters draw from.

use crate::types::TestStatus;
use serde::{Deserialize, Serialize};

/// `@type` of every connector card
pub const MESSAGE_CARD_TYPE: &str = "MessageCard";

/// `@context` of every connector card
pub const MESSAGE_CARD_CONTEXT: &str = "http://schema.org/extensions";

/// Theme colors used by connector cards.
pub mod theme {
    /// Red, for failures and AI summaries
    pub const FAILED: &str = "FF0000";
    /// Green, for all-passing runs
    pub const PASSED: &str = "36a64f";
    /// Orange, for the flaky digest. Carries a leading `#` unlike the others.
    pub const FLAKY: &str = "#FFA500";
}

/// A document ready for delivery.
///
/// Serializes to exactly the JSON body posted to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Notification {
    /// Classic Office 365 connector card
    MessageCard(MessageCard),
    /// Adaptive card wrapped in a `message` attachment envelope
    AdaptiveCard(serde_json::Value),
}

impl Notification {
    /// Short human-readable kind, for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Notification::MessageCard(_) => "message card",
            Notification::AdaptiveCard(_) => "adaptive card",
        }
    }
}

impl From<MessageCard> for Notification {
    fn from(card: MessageCard) -> Self {
        Notification::MessageCard(card)
    }
}

/// Office 365 connector card (`@type: MessageCard`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageCard {
    #[serde(rename = "@type")]
    pub card_type: String,
    #[serde(rename = "@context")]
    pub context: String,
    pub summary: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    pub sections: Vec<Section>,
}

impl MessageCard {
    pub fn new(summary: &str, theme_color: &str, sections: Vec<Section>) -> Self {
        MessageCard {
            card_type: MESSAGE_CARD_TYPE.to_string(),
            context: MESSAGE_CARD_CONTEXT.to_string(),
            summary: summary.to_string(),
            theme_color: theme_color.to_string(),
            sections,
        }
    }
}

/// One section of a connector card.
///
/// Only the populated fields are serialized, so a section renders as a
/// title block, a subtitle line or a plain text footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<Fact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub markdown: bool,
}

impl Section {
    /// Titled block of facts
    pub fn titled(title: &str, facts: Vec<Fact>) -> Self {
        Section { activity_title: Some(title.to_string()), facts, markdown: true, ..Default::default() }
    }

    /// Subtitle-only line
    pub fn subtitle(text: String) -> Self {
        Section { activity_subtitle: Some(text), markdown: true, ..Default::default() }
    }

    /// Plain markdown text
    pub fn text(text: &str) -> Self {
        Section { text: Some(text.to_string()), markdown: true, ..Default::default() }
    }
}

/// Name/value pair displayed in a section. A fact without a value renders
/// as a bare heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Fact {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Fact { name: name.to_string(), value: Some(value.into()) }
    }

    pub fn heading(name: &str) -> Self {
        Fact { name: name.to_string(), value: None }
    }
}

/// Presentation constants for one outcome category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub emoji: &'static str,
    /// Adaptive card chart palette name
    pub chart_color: &'static str,
    /// Adaptive card text color / container style
    pub text_color: &'static str,
}

/// Emoji and colors for each outcome category.
pub fn status_style(status: TestStatus) -> StatusStyle {
    match status {
        TestStatus::Passed => StatusStyle { emoji: "\u{2705}", chart_color: "good", text_color: "good" },
        TestStatus::Failed => StatusStyle { emoji: "\u{274C}", chart_color: "attention", text_color: "attention" },
        TestStatus::Skipped => {
            StatusStyle { emoji: "\u{23E9}\u{FE0F}", chart_color: "divergingCyan", text_color: "accent" }
        }
        TestStatus::Pending => StatusStyle { emoji: "\u{231B}", chart_color: "neutral", text_color: "default" },
        TestStatus::Other => StatusStyle { emoji: "\u{2753}\u{FE0F}", chart_color: "warning", text_color: "warning" },
    }
}

/// Build details resolved from the report environment.
///
/// Recomputed for every message; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentInfo {
    /// Markdown build line (may be a link)
    pub build_info: String,
    /// CTRF environment properties that were absent or empty
    pub missing: Vec<&'static str>,
}
