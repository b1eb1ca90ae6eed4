//! Plain-text failure summary for `fail-details`.

use crate::types::CtrfReport;

/// Output when the report has no failed tests
pub const NO_FAILED_TESTS: &str = "No failed tests.";

/// List every failed test with its message, in report order.
pub fn format_failed_tests_message(report: &CtrfReport) -> String {
    let entries: Vec<String> = report
        .results
        .failed_tests()
        .map(|test| format!("Test: {}\nMessage: {}\n", test.name, test.message.as_deref().unwrap_or("")))
        .collect();

    if entries.is_empty() {
        return NO_FAILED_TESTS.to_string();
    }

    format!("Failed Tests:\n{}", entries.join("\n"))
}
