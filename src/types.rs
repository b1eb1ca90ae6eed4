/// Core data structures for CTRF test reports
///
/// This module defines the report model produced by the CTRF parser and
/// consumed, read-only, by every message formatter.
use serde::{Deserialize, Deserializer};

/// Top-level CTRF document: `{ "results": { ... } }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CtrfReport {
    pub results: CtrfResults,
}

/// The `results` object of a CTRF report
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CtrfResults {
    #[serde(default)]
    pub tool: Option<CtrfTool>,

    pub summary: CtrfSummary,

    #[serde(default)]
    pub tests: Vec<CtrfTest>,

    #[serde(default)]
    pub environment: Option<CtrfEnvironment>,
}

impl CtrfResults {
    /// Tests flagged as flaky, in report order
    pub fn flaky_tests(&self) -> impl Iterator<Item = &CtrfTest> {
        self.tests.iter().filter(|t| t.flaky)
    }

    /// Tests whose status is `failed`, in report order
    pub fn failed_tests(&self) -> impl Iterator<Item = &CtrfTest> {
        self.tests.iter().filter(|t| t.status == TestStatus::Failed)
    }
}

/// Tool that produced the report
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CtrfTool {
    #[serde(default)]
    pub name: String,
}

/// Aggregate outcome counts and run timestamps (milliseconds since epoch)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CtrfSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub tests: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub passed: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub failed: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub skipped: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub pending: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub other: u64,
    #[serde(deserialize_with = "epoch_millis")]
    pub start: i64,
    #[serde(deserialize_with = "epoch_millis")]
    pub stop: i64,
}

impl CtrfSummary {
    /// Count for a single outcome category
    pub fn count(&self, status: TestStatus) -> u64 {
        match status {
            TestStatus::Passed => self.passed,
            TestStatus::Failed => self.failed,
            TestStatus::Skipped => self.skipped,
            TestStatus::Pending => self.pending,
            TestStatus::Other => self.other,
        }
    }
}

/// Descriptive metadata about the run. Any subset of fields may be absent;
/// CTRF properties not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtrfEnvironment {
    pub app_name: Option<String>,
    pub build_name: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub build_number: Option<String>,
    pub build_url: Option<String>,
}

/// A single test case
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CtrfTest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: TestStatus,
    pub message: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub flaky: bool,
    pub ai: Option<String>,
}

/// Outcome of a test. Unknown status strings map to `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    #[default]
    #[serde(other)]
    Other,
}

impl TestStatus {
    /// All outcome categories, in display order
    pub const ALL: [TestStatus; 5] =
        [TestStatus::Passed, TestStatus::Failed, TestStatus::Skipped, TestStatus::Pending, TestStatus::Other];

    /// Capitalised label used as a chart legend
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Passed => "Passed",
            TestStatus::Failed => "Failed",
            TestStatus::Skipped => "Skipped",
            TestStatus::Pending => "Pending",
            TestStatus::Other => "Other",
        }
    }
}

/// Accept `"42"`, `42` or `null` for fields like `buildNumber`
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    }))
}

/// Treat an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Millisecond timestamps; fractional values are truncated, `null` is 0
fn epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => n,
        Some(Raw::Float(f)) => f as i64,
        None => 0,
    })
}
