use std::path::Path;

use seco::core::Finding;
use seco::export::render_json;

#[test]
fn export_json_matches_golden() {
    let findings = vec![
        Finding {
            filename: "app/db.py".to_string(),
            line_number: 12,
            issue_severity: "HIGH".to_string(),
            issue_confidence: "MEDIUM".to_string(),
            issue_text: "Possible SQL injection vector.".to_string(),
            test_id: "B608".to_string(),
            test_name: "hardcoded_sql_expressions".to_string(),
            code: "query = base + user_input".to_string(),
        },
        Finding {
            filename: "app/util.py".to_string(),
            line_number: 3,
            issue_severity: "LOW".to_string(),
            issue_confidence: "HIGH".to_string(),
            issue_text: "Consider possible security implications.".to_string(),
            test_id: "B404".to_string(),
            test_name: "blacklist".to_string(),
            code: String::new(),
        },
    ];

    let body = render_json(&findings, Path::new("/src/project"), "2026-01-01T00:00:00Z")
        .expect("render json");

    let actual: serde_json::Value = serde_json::from_str(&body).expect("parse rendered json");
    let expected: serde_json::Value =
        serde_json::from_str(include_str!("golden/export.json")).expect("parse golden json");

    assert_eq!(actual, expected);
}
