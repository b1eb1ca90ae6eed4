//! Formatting helpers shared by every message builder.

use super::types::EnvironmentInfo;
use crate::types::CtrfEnvironment;

/// Build line used when the report carries no usable build name or number
pub const NO_BUILD_INFO: &str = "No build information provided";

/// Environment properties whose absence is reported back to the user
pub const BUILD_PROPERTIES: [&str; 3] = ["buildName", "buildNumber", "buildUrl"];

/// Footer attached to every connector card
pub const FOOTER: &str = "[A CTRF plugin](https://github.com/ctrf-io/teams-ctrf)";

/// `Some` only for present, non-empty values.
///
/// Environment fields treat `""` the same as a missing key.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// "Passed" or "<N> failed tests"
pub fn result_text(failed: u64) -> String {
    if failed > 0 { format!("{} failed tests", failed) } else { "Passed".to_string() }
}

/// Elapsed time between two millisecond timestamps as `HH:MM:SS`.
///
/// Anything under one second (including a stop before start) is `<1s`.
/// Hours keep counting past 24.
pub fn format_duration(start: i64, stop: i64) -> String {
    let elapsed_ms = stop.saturating_sub(start);
    if elapsed_ms < 1000 {
        return "<1s".to_string();
    }

    let elapsed = chrono::Duration::milliseconds(elapsed_ms);
    format!("{:02}:{:02}:{:02}", elapsed.num_hours(), elapsed.num_minutes() % 60, elapsed.num_seconds() % 60)
}

/// Resolve the build line and the list of missing build properties.
pub fn resolve_environment(environment: Option<&CtrfEnvironment>) -> EnvironmentInfo {
    let Some(env) = environment else {
        return EnvironmentInfo { build_info: NO_BUILD_INFO.to_string(), missing: BUILD_PROPERTIES.to_vec() };
    };

    let name = non_empty(&env.build_name);
    let number = non_empty(&env.build_number);
    let url = non_empty(&env.build_url);

    let build_info = match (name, number, url) {
        (Some(name), Some(number), Some(url)) => format!("[{} #{}]({})", name, number, url),
        (Some(name), Some(number), None) => format!("{} #{}", name, number),
        (None, None, _) => NO_BUILD_INFO.to_string(),
        (name, number, _) => format!("{} {}", name.unwrap_or(""), number.unwrap_or("")),
    };

    let missing = BUILD_PROPERTIES
        .iter()
        .zip([name, number, url])
        .filter(|(_, value)| value.is_none())
        .map(|(property, _)| *property)
        .collect();

    EnvironmentInfo { build_info, missing }
}

/// Warning line listing missing environment properties, if there are any
pub fn missing_properties_notice(missing: &[&str]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }

    Some(format!(
        "&#x26A0; Missing environment properties: {}. Add these to your CTRF report for a better experience.",
        missing.join(", ")
    ))
}

#[cfg(test)]
#[path = "helpers_test.rs"]
mod helpers_test;
