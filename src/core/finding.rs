use serde::{Deserialize, Serialize};

/// One normalized security issue record, as reported by the external scanner.
///
/// Field names match the scanner's JSON result entries, so the same type is
/// used to deserialize scanner output and to serialize export reports.
/// Severity and confidence are kept as raw strings; unrecognized values pass
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub filename: String,
    pub line_number: u64,
    pub issue_severity: String,
    pub issue_confidence: String,
    pub issue_text: String,
    pub test_id: String,
    pub test_name: String,
    #[serde(default)]
    pub code: String,
}
