/// The three severity/confidence levels the scanner conventionally emits.
///
/// Recognition is an exact match on the raw string; anything else is shown
/// as-is, undecorated (terminal) or in the fallback color (HTML).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityLevel {
    High,
    Medium,
    Low,
}

impl SeverityLevel {
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "HIGH" => Some(SeverityLevel::High),
            "MEDIUM" => Some(SeverityLevel::Medium),
            "LOW" => Some(SeverityLevel::Low),
            _ => None,
        }
    }

    /// ANSI SGR parameters for the terminal table (bold + color).
    pub const fn ansi_code(self) -> &'static str {
        match self {
            SeverityLevel::High => "1;31",
            SeverityLevel::Medium => "1;33",
            SeverityLevel::Low => "1;32",
        }
    }

    /// CSS color name for the HTML report severity cell.
    pub const fn html_color(self) -> &'static str {
        match self {
            SeverityLevel::High => "red",
            SeverityLevel::Medium => "orange",
            SeverityLevel::Low => "green",
        }
    }
}
