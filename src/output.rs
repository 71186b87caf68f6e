//! Output formatting and persistence for calculated results.
//!
//! Supports structured log lines, pretty JSON on stdout, and writing the
//! exported report to disk.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::grading::{AggregateResult, StandingReport, Summary};

/// Logs one aggregate and its standing as a structured event.
pub fn log_result(kind: &str, result: &AggregateResult, standing: &StandingReport) {
    debug!(
        kind,
        gpa = %format!("{:.2}", result.value),
        credits = result.total_weight,
        included = result.included_count,
        standing = standing.label,
        progress = %format!("{:.1}", standing.progress_percentage),
        "Calculated"
    );
}

/// Logs the full summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &Summary) {
    debug!("{:#?}", summary);
}

/// Serializes `value` as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}

/// Writes `contents` to `path`, creating parent directories as needed.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, contents)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "Report written");

    Ok(())
}
