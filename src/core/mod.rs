mod finding;
mod report;
mod severity;

pub use finding::Finding;
pub use report::{ExportReport, ScanInfo};
pub use severity::SeverityLevel;
