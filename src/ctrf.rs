/// CTRF report loading
///
/// Reads a report file from disk and deserializes it into the
/// `types::CtrfReport` model. Structural validation is limited to what
/// serde enforces: a `results` object with a `summary`.
use crate::error::NotifyError;
use crate::types::CtrfReport;
use log::debug;
use std::fs;
use std::path::Path;

/// Load and parse a CTRF report file
pub fn parse_ctrf_file(path: &Path) -> Result<CtrfReport, NotifyError> {
    debug!("reading CTRF report from {:?}", path);

    let contents = fs::read_to_string(path).map_err(|source| NotifyError::Read { path: path.to_path_buf(), source })?;

    let report =
        parse_ctrf_str(&contents).map_err(|source| NotifyError::Parse { path: path.to_path_buf(), source })?;

    debug!(
        "parsed report from {}: {} tests in summary, {} listed ({} failed)",
        report.results.tool.as_ref().map(|t| t.name.as_str()).unwrap_or("unknown tool"),
        report.results.summary.tests,
        report.results.tests.len(),
        report.results.summary.failed
    );

    Ok(report)
}

/// Parse a CTRF report held in memory
pub fn parse_ctrf_str(contents: &str) -> Result<CtrfReport, serde_json::Error> {
    serde_json::from_str(contents)
}
