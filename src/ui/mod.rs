use anyhow::Error;
use std::io::{self, Write};
use std::path::Path;
use unicode_width::UnicodeWidthChar;

use crate::core::{Finding, SeverityLevel};

#[derive(Debug, Clone)]
pub struct UiConfig {
    pub color: bool,
    pub quiet: bool,
    pub verbose: bool,
}

pub fn eprintln_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "Error:");
    let _ = writeln!(stderr, "  {err}");

    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        let _ = writeln!(stderr, "Caused by:");
        for cause in causes {
            let _ = writeln!(stderr, "  - {cause}");
        }
    }

    let _ = writeln!(stderr, "Next steps:");
    let _ = writeln!(stderr, "  - re-run with `--verbose` for more detail");
    let _ = writeln!(stderr, "  - see `seco --help` for available options");
}

/// Recoverable-tier message; the run continues after this.
pub fn eprintln_warning(message: &str) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{message}");
}

/// Dump the raw subprocess capture so an unparseable payload can be diagnosed.
pub fn eprintln_raw_output(stdout: &str, stderr_text: &str) {
    let mut stderr = io::stderr().lock();
    if !stdout.trim().is_empty() {
        let _ = writeln!(stderr, "scanner stdout:");
        let _ = writeln!(stderr, "{stdout}");
    }
    if !stderr_text.trim().is_empty() {
        let _ = writeln!(stderr, "scanner stderr:");
        let _ = writeln!(stderr, "{stderr_text}");
    }
}

pub fn print_scan_header(cfg: &UiConfig, target: &Path) {
    if cfg.quiet {
        return;
    }
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "Seco Security Scanner");
    let _ = writeln!(out, "Scanning {}", target.display());
}

pub fn println_info(cfg: &UiConfig, message: &str) {
    if cfg.quiet {
        return;
    }
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{message}");
}

/// Render the findings table, or the single success message when there is
/// nothing to show. One row per finding, in scanner emission order.
pub fn print_findings(out: &mut dyn Write, findings: &[Finding], color: bool) {
    if findings.is_empty() {
        let _ = writeln!(out, "No security issues found!");
        return;
    }

    let _ = writeln!(out, "Security Scan Results");

    let label_severity = "Severity";
    let label_confidence = "Confidence";
    let label_file = "File";
    let label_line = "Line";
    let label_issue = "Issue";

    let severity_w = findings
        .iter()
        .map(|f| visible_width_ansi(&f.issue_severity))
        .max()
        .unwrap_or(0)
        .max(visible_width_ansi(label_severity));
    let confidence_w = findings
        .iter()
        .map(|f| visible_width_ansi(&f.issue_confidence))
        .max()
        .unwrap_or(0)
        .max(visible_width_ansi(label_confidence));
    let file_w = findings
        .iter()
        .map(|f| visible_width_ansi(&f.filename))
        .max()
        .unwrap_or(0)
        .max(visible_width_ansi(label_file));
    let line_w = findings
        .iter()
        .map(|f| visible_width_ansi(&f.line_number.to_string()))
        .max()
        .unwrap_or(0)
        .max(visible_width_ansi(label_line));

    let _ = writeln!(
        out,
        "{}  {}  {}  {}  {}",
        pad_end_display(label_severity, severity_w),
        pad_end_display(label_confidence, confidence_w),
        pad_end_display(label_file, file_w),
        pad_start_display(label_line, line_w),
        label_issue
    );
    let _ = writeln!(
        out,
        "{}  {}  {}  {}  {}",
        "-".repeat(severity_w),
        "-".repeat(confidence_w),
        "-".repeat(file_w),
        "-".repeat(line_w),
        "-".repeat(visible_width_ansi(label_issue))
    );

    for finding in findings {
        let severity = pad_end_ansi(&format_severity(&finding.issue_severity, color), severity_w);
        let confidence = pad_end_ansi(
            &format_severity(&finding.issue_confidence, color),
            confidence_w,
        );
        let file = pad_end_display(&finding.filename, file_w);
        let line = pad_start_display(&finding.line_number.to_string(), line_w);
        let _ = writeln!(out, "{severity}  {confidence}  {file}  {line}  {}", finding.issue_text);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total issues found: {}", findings.len());
}

/// Decorate a severity/confidence value for the terminal. Only the exact
/// HIGH/MEDIUM/LOW strings are decorated; anything else is shown as-is.
pub fn format_severity(raw: &str, color: bool) -> String {
    let Some(level) = SeverityLevel::from_raw(raw) else {
        return raw.to_string();
    };
    if !color {
        return raw.to_string();
    }
    format!("\x1b[{}m{raw}\x1b[0m", level.ansi_code())
}

fn pad_end_ansi(s: &str, width: usize) -> String {
    let w = visible_width_ansi(s);
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

fn pad_end_display(s: &str, width: usize) -> String {
    let w = visible_width_ansi(s);
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

fn pad_start_display(s: &str, width: usize) -> String {
    let w = visible_width_ansi(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{}", " ".repeat(width - w), s)
}

fn visible_width_ansi(s: &str) -> usize {
    let mut width: usize = 0;
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                let _ = chars.next();
                for ch2 in chars.by_ref() {
                    if ch2 == 'm' {
                        break;
                    }
                }
                continue;
            }
        }
        width = width.saturating_add(UnicodeWidthChar::width(ch).unwrap_or(0));
    }
    width
}
