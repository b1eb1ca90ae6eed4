/// Per-command orchestration
///
/// Picks the formatter for each command, applies the "nothing to send"
/// rules and hands the resulting messages to `teams` for delivery.
use crate::config::DeliveryConfig;
use crate::error::NotifyError;
use crate::format::{self, Notification};
use crate::teams;
use crate::types::CtrfReport;
use log::{debug, info};

pub const NO_FAILURES_SKIP: &str = "No failed tests. Message not sent.";
pub const NO_FLAKY_SKIP: &str = "No flaky tests detected. No message sent.";
pub const NO_AI_SKIP: &str = "No AI summary detected. No message sent.";

/// What happened to a single-message command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    /// Nothing qualified; the reason is shown to the user
    Skipped(&'static str),
}

/// Options for the `results` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultsOptions {
    pub on_fail_only: bool,
    pub use_adaptive_card: bool,
}

/// Build the results message, or `None` when `on_fail_only` suppresses it
pub fn build_results_notification(report: &CtrfReport, options: ResultsOptions) -> Option<Notification> {
    if options.on_fail_only && report.results.summary.failed == 0 {
        return None;
    }

    if options.use_adaptive_card {
        Some(Notification::AdaptiveCard(format::format_results_adaptive_card(report)))
    } else {
        Some(format::format_results_message(report).into())
    }
}

/// `results` command
pub fn send_test_results(
    report: &CtrfReport,
    options: ResultsOptions,
    config: &DeliveryConfig,
) -> Result<Outcome, NotifyError> {
    let Some(message) = build_results_notification(report, options) else {
        debug!("on-fail-only set and no failures");
        return Ok(Outcome::Skipped(NO_FAILURES_SKIP));
    };

    teams::send_teams_message(config, &message)?;
    Ok(Outcome::Sent)
}

/// `flaky` command
pub fn send_flaky_results(report: &CtrfReport, config: &DeliveryConfig) -> Result<Outcome, NotifyError> {
    let Some(card) = format::format_flaky_tests_message(report) else {
        return Ok(Outcome::Skipped(NO_FLAKY_SKIP));
    };

    teams::send_teams_message(config, &card.into())?;
    Ok(Outcome::Sent)
}

/// One AI summary card per test that carries an `ai` field, in report order
pub fn build_ai_summaries(report: &CtrfReport) -> Vec<Notification> {
    let environment = report.results.environment.as_ref();
    report
        .results
        .tests
        .iter()
        .filter_map(|test| format::format_ai_summary_for_test(test, environment))
        .map(Notification::from)
        .collect()
}

/// `ai` command. Returns the number of messages delivered.
///
/// Stops at the first delivery failure.
pub fn send_ai_summaries(report: &CtrfReport, config: &DeliveryConfig) -> Result<usize, NotifyError> {
    let messages = build_ai_summaries(report);
    debug!("{} of {} tests carry an AI summary", messages.len(), report.results.tests.len());

    for (i, message) in messages.iter().enumerate() {
        teams::send_teams_message(config, message)?;
        info!("AI summary {}/{} sent", i + 1, messages.len());
    }

    Ok(messages.len())
}

/// `fail-details` command
pub fn failed_tests_summary(report: &CtrfReport) -> String {
    format::format_failed_tests_message(report)
}
