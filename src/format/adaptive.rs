//! Adaptive card builder for `results --use-adaptive-card`.
//!
//! Renders a status banner, a donut chart of the five outcome counts and a
//! column of summary rows, wrapped in the Teams attachment envelope.

use super::helpers::{format_duration, non_empty, result_text};
use super::types::status_style;
use crate::types::{CtrfEnvironment, CtrfReport, CtrfSummary, TestStatus};
use serde_json::{Value, json};

pub const ADAPTIVE_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
pub const ADAPTIVE_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
pub const ADAPTIVE_VERSION: &str = "1.5";

const DEFAULT_APP_TITLE: &str = "CTRF";
const DEFAULT_BUILD_TITLE: &str = "Build Info";

/// Titles and link derived from the report environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHeader {
    pub app_title: String,
    /// Plain label, never a markdown link
    pub build_title: String,
    pub build_url: Option<String>,
}

impl CardHeader {
    pub fn from_environment(environment: Option<&CtrfEnvironment>) -> Self {
        let Some(env) = environment else {
            return CardHeader {
                app_title: DEFAULT_APP_TITLE.to_string(),
                build_title: DEFAULT_BUILD_TITLE.to_string(),
                build_url: None,
            };
        };

        let build_title = match (non_empty(&env.build_name), non_empty(&env.build_number)) {
            (Some(name), Some(number)) => format!("{} #{}", name, number),
            (None, None) => DEFAULT_BUILD_TITLE.to_string(),
            (name, number) => format!("{}{}", name.unwrap_or(""), number.unwrap_or("")),
        };

        CardHeader {
            app_title: non_empty(&env.app_name).unwrap_or(DEFAULT_APP_TITLE).to_string(),
            build_title,
            build_url: non_empty(&env.build_url).map(String::from),
        }
    }
}

/// Banner status: only failures turn the card red.
pub fn overall_status(summary: &CtrfSummary) -> TestStatus {
    if summary.failed > 0 { TestStatus::Failed } else { TestStatus::Passed }
}

/// Build the adaptive card message for a report.
pub fn format_results_adaptive_card(report: &CtrfReport) -> Value {
    let summary = &report.results.summary;
    let header = CardHeader::from_environment(report.results.environment.as_ref());
    let banner = status_style(overall_status(summary));
    let results = result_text(summary.failed);
    let duration = format_duration(summary.start, summary.stop);

    let actions: Vec<Value> = header
        .build_url
        .as_ref()
        .map(|url| json!({ "type": "Action.OpenUrl", "title": header.build_title, "url": url }))
        .into_iter()
        .collect();

    json!({
        "type": "message",
        "attachments": [
            {
                "contentType": ADAPTIVE_CONTENT_TYPE,
                "content": {
                    "$schema": ADAPTIVE_SCHEMA,
                    "type": "AdaptiveCard",
                    "version": ADAPTIVE_VERSION,
                    "speak": format!("{} Test Results. {} in {}", header.app_title, results, duration),
                    "msteams": { "width": "Full" },
                    "body": [
                        {
                            "type": "Container",
                            "items": [
                                {
                                    "type": "TextBlock",
                                    "size": "Large",
                                    "weight": "Bolder",
                                    "text": format!("{}  {} Test Results", banner.emoji, header.app_title),
                                    "wrap": true
                                }
                            ],
                            "style": banner.text_color,
                            "bleed": true
                        },
                        {
                            "type": "ColumnSet",
                            "columns": [
                                {
                                    "type": "Column",
                                    "width": "100px",
                                    "items": [donut_chart(summary)]
                                },
                                {
                                    "type": "Column",
                                    "width": "stretch",
                                    "verticalContentAlignment": "center",
                                    "items": [
                                        count_row(summary),
                                        labelled_row("Results:", &results),
                                        labelled_row("Duration:", &duration)
                                    ]
                                }
                            ]
                        }
                    ],
                    "actions": actions
                }
            }
        ]
    })
}

fn donut_chart(summary: &CtrfSummary) -> Value {
    let data: Vec<Value> = TestStatus::ALL
        .iter()
        .map(|status| {
            json!({
                "legend": status.label(),
                "color": status_style(*status).chart_color,
                "value": summary.count(*status)
            })
        })
        .collect();

    json!({ "title": "Summary", "data": data, "type": "Chart.Donut" })
}

/// `Summary:` followed by one emoji/count block per outcome
fn count_row(summary: &CtrfSummary) -> Value {
    let mut columns = vec![auto_column(json!({ "type": "TextBlock", "text": "Summary:", "weight": "Bolder" }))];

    columns.extend(TestStatus::ALL.iter().map(|status| {
        let style = status_style(*status);
        auto_column(json!({
            "type": "TextBlock",
            "text": format!("{} {}", style.emoji, summary.count(*status)),
            "color": style.text_color,
            "weight": "Bolder",
            "wrap": true
        }))
    }));

    json!({ "type": "ColumnSet", "columns": columns })
}

fn labelled_row(label: &str, value: &str) -> Value {
    json!({
        "type": "ColumnSet",
        "columns": [
            auto_column(json!({ "type": "TextBlock", "text": label, "weight": "Bolder", "wrap": true })),
            auto_column(json!({ "type": "TextBlock", "text": value, "weight": "Bolder", "wrap": true }))
        ]
    })
}

fn auto_column(item: Value) -> Value {
    json!({ "type": "Column", "width": "auto", "items": [item] })
}

#[cfg(test)]
#[path = "adaptive_test.rs"]
mod adaptive_test;
