//! Rendered report output matches the documented shape

#[cfg(test)]
mod tests {
    use ava::models::{Severity, ValidationIssue, ValidationResult};
    use ava::services::validate::report::{render_report, save_report};
    use tempfile::TempDir;

    fn broken_result() -> ValidationResult {
        let mut result = ValidationResult::new("assets/broken.obj");
        result.add_issue(
            ValidationIssue::new(Severity::Critical, "File does not exist", "assets/broken.obj")
                .with_recommendation("Restore the file from source control"),
        );
        result
    }

    #[test]
    fn test_report_banner_layout() {
        let report = render_report(&[broken_result()], 1_700_000_000);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "=".repeat(70));
        assert_eq!(lines[1], "ASSET VALIDATION REPORT");
        assert_eq!(lines[2], "Generated: 2023-11-14 22:13:20 UTC");
        assert_eq!(lines[3], "=".repeat(70));
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Summary");
    }

    #[test]
    fn test_report_detail_block_layout() {
        let report = render_report(&[broken_result()], 0);

        assert!(report.contains("\nassets/broken.obj [INVALID]\n"));
        assert!(report.contains("\n  [CRITICAL] File does not exist\n"));
        assert!(report.contains("\n      fix: Restore the file from source control\n"));
        assert!(report.contains(&"-".repeat(70)));
    }

    #[test]
    fn test_severity_labels_serialize_uppercase() {
        let mut result = ValidationResult::new("a.obj");
        result.add_issue(ValidationIssue::new(Severity::Warning, "odd bytes", "a.obj"));

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"severity\":\"WARNING\""));
        assert!(json.contains("\"asset_path\":\"a.obj\""));
        assert!(json.contains("\"is_valid\":true"));
    }

    #[test]
    fn test_saved_report_matches_rendered_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("reports/latest.txt");

        let rendered = render_report(&[broken_result()], 1_700_000_000);
        assert!(save_report(&path, &rendered), "parent dirs are created on demand");

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, rendered);
    }
}
