//! Connector card builders: run summary, flaky digest and AI failure summary.
//!
//! All three cards share the same tail: a build fact, an optional warning
//! about missing environment properties, and the plugin footer.

use super::helpers::{FOOTER, format_duration, missing_properties_notice, resolve_environment, result_text};
use super::types::{Fact, MessageCard, Section, theme};
use crate::types::{CtrfEnvironment, CtrfReport, CtrfTest};

const RESULTS_TITLE: &str = "CTRF Test Results";
const FLAKY_TITLE: &str = "Flaky Test Report";
const AI_TITLE: &str = "AI Test Summary";

/// Fallback for an AI summary that is present but empty
pub const NO_AI_SUMMARY: &str = "No AI summary provided.";

/// Build the run summary card.
///
/// Always returns a card; `--on-fail-only` gating is the reporter's job.
pub fn format_results_message(report: &CtrfReport) -> MessageCard {
    let summary = &report.results.summary;
    let env = resolve_environment(report.results.environment.as_ref());

    let tally = format!(
        "&#x2705; {} | &#x274C; {} | &#x23E9; {} | &#x23F3; {} | &#x2753; {}",
        summary.passed, summary.failed, summary.skipped, summary.pending, summary.other
    );

    let facts = vec![
        Fact::new("Test Summary", tally),
        Fact::new("Results", result_text(summary.failed)),
        Fact::new("Duration", format!("*Duration:* {}", format_duration(summary.start, summary.stop))),
        Fact::new("Build", env.build_info),
    ];

    let color = if summary.failed > 0 { theme::FAILED } else { theme::PASSED };
    MessageCard::new(RESULTS_TITLE, color, with_footer(Section::titled(RESULTS_TITLE, facts), &env.missing))
}

/// Build the flaky test digest, or `None` when no test is flagged flaky.
pub fn format_flaky_tests_message(report: &CtrfReport) -> Option<MessageCard> {
    let flaky: Vec<String> = report.results.flaky_tests().map(|t| format!("- {}", t.name)).collect();
    if flaky.is_empty() {
        return None;
    }

    let env = resolve_environment(report.results.environment.as_ref());
    let facts = vec![
        Fact::heading("&#x1F342; Flaky Tests Detected"),
        Fact::new("Flaky Tests", flaky.join("\n")),
        Fact::new("Build", env.build_info),
    ];

    Some(MessageCard::new(FLAKY_TITLE, theme::FLAKY, with_footer(Section::titled(FLAKY_TITLE, facts), &env.missing)))
}

/// Build the AI summary card for one test, or `None` when the test has no
/// `ai` field at all. An empty `ai` string still yields a card.
pub fn format_ai_summary_for_test(test: &CtrfTest, environment: Option<&CtrfEnvironment>) -> Option<MessageCard> {
    let ai = test.ai.as_deref()?;
    let env = resolve_environment(environment);

    let facts = vec![
        Fact::new("Test Name", test.name.as_str()),
        Fact::new("Status", "Failed"),
        Fact::new("&#x2728; AI Summary", if ai.is_empty() { NO_AI_SUMMARY } else { ai }),
        Fact::new("Build", env.build_info),
    ];

    Some(MessageCard::new(AI_TITLE, theme::FAILED, with_footer(Section::titled(AI_TITLE, facts), &env.missing)))
}

/// Main section, then the missing-properties warning if any, then the footer
fn with_footer(main: Section, missing: &[&str]) -> Vec<Section> {
    let mut sections = vec![main];
    if let Some(notice) = missing_properties_notice(missing) {
        sections.push(Section::subtitle(notice));
    }
    sections.push(Section::text(FOOTER));
    sections
}

#[cfg(test)]
#[path = "message_card_test.rs"]
mod message_card_test;
