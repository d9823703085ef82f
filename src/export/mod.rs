use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

use crate::core::{ExportReport, Finding, ScanInfo};

mod html;

/// The two supported report formats. Keeping this a closed enum makes an
/// unsupported format unrepresentable past the CLI boundary; adding a format
/// is a one-variant change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Html,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Html => "html",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "html" => Ok(ExportFormat::Html),
            other => Err(format!(
                "unsupported output format: {other} (expected json or html)"
            )),
        }
    }
}

/// Write the findings to `path` in the requested format.
///
/// The caller is responsible for the empty-findings notice; this function is
/// only invoked with something to write. I/O failure is an `Err` the caller
/// reports without aborting the run.
pub fn export(
    findings: &[Finding],
    target: &Path,
    format: ExportFormat,
    path: &Path,
) -> Result<()> {
    let body = match format {
        ExportFormat::Json => render_json(findings, target, &now_rfc3339())?,
        ExportFormat::Html => html::render(findings, target, &now_display()),
    };

    std::fs::write(path, body)
        .with_context(|| format!("failed to write report: {}", path.display()))?;
    Ok(())
}

/// The JSON report: `scan_info` (export timestamp + absolute target) and the
/// full ordered finding sequence, pretty-printed with 2-space indentation.
pub fn render_json(findings: &[Finding], target: &Path, date: &str) -> Result<String> {
    let report = ExportReport {
        scan_info: ScanInfo {
            date: date.to_string(),
            target: target.display().to_string(),
        },
        results: findings.to_vec(),
    };
    serde_json::to_string_pretty(&report).context("failed to serialize report")
}

/// Default report filename when `--output` is given without `--file`.
pub fn default_file_name(format: ExportFormat) -> String {
    let stamp_format = format_description!("[year][month][day]_[hour][minute][second]");
    let stamp = OffsetDateTime::now_utc()
        .format(&stamp_format)
        .unwrap_or_else(|_| "unknown".to_string());
    format!("seco_report_{stamp}.{}", format.extension())
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}

fn now_display() -> String {
    let display_format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc()
        .format(&display_format)
        .unwrap_or_else(|_| "unknown".to_string())
}
