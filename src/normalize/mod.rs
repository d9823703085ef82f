use serde::Deserialize;

use crate::core::Finding;

/// The slice of the scanner's JSON schema this tool depends on. Everything
/// else in the payload is discarded.
#[derive(Debug, Default, Deserialize)]
struct ScannerPayload {
    #[serde(default)]
    results: Vec<Finding>,
}

/// Parse raw scanner stdout into findings, preserving emission order.
///
/// A missing `results` key is an empty collection. The optional `code` field
/// defaults to the empty string. No range or enum validation is applied to
/// the values; they pass through as received. A parse error is recoverable
/// for the caller (report it, continue with zero findings).
pub fn parse_findings(raw: &str) -> Result<Vec<Finding>, serde_json::Error> {
    let payload: ScannerPayload = serde_json::from_str(raw)?;
    Ok(payload.results)
}
