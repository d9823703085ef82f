use crate::core::Finding;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanInfo {
    pub date: String,
    pub target: String,
}

/// Top-level shape of the JSON export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportReport {
    pub scan_info: ScanInfo,
    pub results: Vec<Finding>,
}
