/// Integration tests for the teams-ctrf binary
///
/// These tests run the built binary in --dry-run mode against the report
/// fixtures, so no webhook or network access is needed.
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// Helper to get a fixture report path
fn fixture(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    Path::new(manifest_dir).join("test-fixtures").join(name)
}

// Helper to run the binary with a clean webhook environment
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_teams-ctrf"))
        .args(args)
        .env_remove("TEAMS_WEBHOOK_URL")
        .output()
        .unwrap_or_else(|e| panic!("Failed to run teams-ctrf {}: {}", args.join(" "), e))
}

// Helper to assert the command succeeded and return stdout
fn assert_success(output: &Output, context: &str) -> String {
    assert!(
        output.status.success(),
        "{} failed with status: {:?}\nstderr: {}",
        context,
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

// Helper to parse every JSON document printed to stdout
fn json_documents(stdout: &str) -> Vec<Value> {
    serde_json::Deserializer::from_str(stdout).into_iter::<Value>().collect::<Result<_, _>>().unwrap()
}

#[test]
fn test_fixtures_exist() {
    assert!(fixture("ctrf-report.json").exists());
    assert!(fixture("passing-report.json").exists());
}

#[test]
fn test_results_message_card() {
    let path = fixture("ctrf-report.json");
    let output = run_cli(&["results", path.to_str().unwrap(), "--dry-run"]);
    let docs = json_documents(&assert_success(&output, "results --dry-run"));

    assert_eq!(docs.len(), 1);
    let card = &docs[0];
    assert_eq!(card["@type"], "MessageCard");
    assert_eq!(card["themeColor"], "FF0000");

    let facts = &card["sections"][0]["facts"];
    assert_eq!(facts[0]["value"], "&#x2705; 3 | &#x274C; 2 | &#x23E9; 1 | &#x23F3; 0 | &#x2753; 0");
    assert_eq!(facts[1]["value"], "2 failed tests");
    assert_eq!(facts[2]["value"], "*Duration:* 00:01:05");
    assert_eq!(facts[3]["value"], "[main #118](https://ci.example.com/builds/118)");
    assert_eq!(card["sections"].as_array().unwrap().len(), 2);
}

#[test]
fn test_results_adaptive_card() {
    let path = fixture("ctrf-report.json");
    let output = run_cli(&["results", path.to_str().unwrap(), "--use-adaptive-card", "--dry-run"]);
    let docs = json_documents(&assert_success(&output, "results -a --dry-run"));

    let content = &docs[0]["attachments"][0]["content"];
    assert_eq!(docs[0]["type"], "message");
    assert_eq!(content["version"], "1.5");
    assert_eq!(content["speak"], "Storefront Test Results. 2 failed tests in 00:01:05");
    assert_eq!(content["actions"][0]["title"], "main #118");
    assert_eq!(content["actions"][0]["url"], "https://ci.example.com/builds/118");
}

#[test]
fn test_results_on_fail_only_skips_passing_run() {
    let path = fixture("passing-report.json");
    let output = run_cli(&["results", path.to_str().unwrap(), "--on-fail-only", "--dry-run"]);
    let stdout = assert_success(&output, "results -f --dry-run");

    assert!(stdout.contains("No failed tests. Message not sent."));
    assert!(!stdout.contains("MessageCard"));
}

#[test]
fn test_results_passing_run() {
    let path = fixture("passing-report.json");
    let output = run_cli(&["results", path.to_str().unwrap(), "--dry-run"]);
    let docs = json_documents(&assert_success(&output, "results --dry-run"));

    let card = &docs[0];
    assert_eq!(card["themeColor"], "36a64f");
    assert_eq!(card["sections"][0]["facts"][1]["value"], "Passed");
    assert_eq!(card["sections"][0]["facts"][2]["value"], "*Duration:* <1s");
    assert_eq!(
        card["sections"][1]["activitySubtitle"],
        "&#x26A0; Missing environment properties: buildName, buildNumber, buildUrl. \
         Add these to your CTRF report for a better experience."
    );
}

#[test]
fn test_flaky_digest() {
    let path = fixture("ctrf-report.json");
    let output = run_cli(&["flaky", path.to_str().unwrap(), "--dry-run"]);
    let docs = json_documents(&assert_success(&output, "flaky --dry-run"));

    assert_eq!(docs[0]["themeColor"], "#FFA500");
    assert_eq!(docs[0]["sections"][0]["facts"][1]["value"], "- search returns results\n- cart badge updates");
}

#[test]
fn test_flaky_nothing_to_send() {
    let path = fixture("passing-report.json");
    let output = run_cli(&["flaky", path.to_str().unwrap(), "--dry-run"]);
    let stdout = assert_success(&output, "flaky --dry-run");
    assert!(stdout.contains("No flaky tests detected. No message sent."));
}

#[test]
fn test_ai_summaries() {
    let path = fixture("ctrf-report.json");
    let output = run_cli(&["ai", path.to_str().unwrap(), "--dry-run"]);
    let docs = json_documents(&assert_success(&output, "ai --dry-run"));

    assert_eq!(docs.len(), 1);
    let facts = &docs[0]["sections"][0]["facts"];
    assert_eq!(facts[0]["value"], "checkout applies coupon");
    assert_eq!(facts[2]["value"], "The coupon endpoint returned 404; the discount was never applied.");
}

#[test]
fn test_fail_details_prints_plain_text() {
    let path = fixture("ctrf-report.json");
    let output = run_cli(&["fail-details", path.to_str().unwrap()]);
    let stdout = assert_success(&output, "fail-details");

    assert_eq!(
        stdout,
        "Failed Tests:\n\
         Test: checkout applies coupon\nMessage: Expected total to be 90 but was 100\n\n\
         Test: profile avatar upload\nMessage: Timeout 30000ms exceeded\n\n"
    );
}

#[test]
fn test_missing_webhook_fails() {
    let path = fixture("ctrf-report.json");
    let output = run_cli(&["results", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("TEAMS_WEBHOOK_URL"));
}

#[test]
fn test_missing_report_fails() {
    let output = run_cli(&["results", "/no/such/ctrf-report.json", "--dry-run"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("/no/such/ctrf-report.json"));
}

#[test]
fn test_malformed_report_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"results\": ").unwrap();

    let output = run_cli(&["flaky", file.path().to_str().unwrap(), "--dry-run"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse CTRF report"));
}
