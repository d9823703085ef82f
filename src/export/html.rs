use std::fmt::Write as _;
use std::path::Path;

use crate::core::{Finding, SeverityLevel};

/// Self-contained HTML report: embedded stylesheet, info block, and one table
/// row per finding in sequence order. Unlike the terminal view the table also
/// carries the scanner's test/rule identifier.
pub fn render(findings: &[Finding], target: &Path, date: &str) -> String {
    let mut rows = String::new();
    for finding in findings {
        let color = SeverityLevel::from_raw(&finding.issue_severity)
            .map(SeverityLevel::html_color)
            .unwrap_or("black");
        let _ = write!(
            rows,
            r#"                <tr>
                    <td style="color: {color}; font-weight: bold;">{severity}</td>
                    <td>{confidence}</td>
                    <td>{file}</td>
                    <td>{line}</td>
                    <td>{issue}</td>
                    <td>{test_id}</td>
                </tr>
"#,
            severity = escape(&finding.issue_severity),
            confidence = escape(&finding.issue_confidence),
            file = escape(&finding.filename),
            line = finding.line_number,
            issue = escape(&finding.issue_text),
            test_id = escape(&finding.test_id),
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Seco Security Scan Report</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 20px; }}
        h1 {{ color: #2c3e50; }}
        table {{ border-collapse: collapse; width: 100%; margin-top: 20px; }}
        th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
        th {{ background-color: #2c3e50; color: white; }}
        tr:nth-child(even) {{ background-color: #f2f2f2; }}
        .info {{ background-color: #eef; padding: 10px; border-radius: 5px; }}
    </style>
</head>
<body>
    <h1>Seco Security Scan Report</h1>
    <div class="info">
        <p><strong>Date:</strong> {date}</p>
        <p><strong>Target:</strong> {target}</p>
        <p><strong>Total Issues:</strong> {total}</p>
    </div>

    <h2>Issues Found</h2>
    <table>
        <tr>
            <th>Severity</th>
            <th>Confidence</th>
            <th>File</th>
            <th>Line</th>
            <th>Issue</th>
            <th>Test ID</th>
        </tr>
{rows}    </table>
</body>
</html>
"#,
        date = escape(date),
        target = escape(&target.display().to_string()),
        total = findings.len(),
    )
}

/// Issue text and code excerpts carry arbitrary source fragments; they must
/// not be interpolated into the document as markup.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
