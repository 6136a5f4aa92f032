//! Unit tests for severity ordering and validation accounting

#[cfg(test)]
mod tests {
    use ava::models::{Severity, ValidationIssue, ValidationResult, ValidationStats};

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_warnings_keep_result_valid() {
        let mut result = ValidationResult::new("a.obj");
        assert!(result.is_valid);

        result.add_issue(ValidationIssue::new(Severity::Info, "note", "a.obj"));
        result.add_issue(ValidationIssue::new(Severity::Warning, "odd", "a.obj"));

        assert!(result.is_valid);
        assert_eq!(result.info_count, 1);
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.total_issues, 2);
    }

    #[test]
    fn test_errors_invalidate_result() {
        let mut result = ValidationResult::new("a.obj");
        result.add_issue(ValidationIssue::new(Severity::Error, "broken", "a.obj"));
        assert!(!result.is_valid);
        assert_eq!(result.count_at(Severity::Error), 1);

        let mut critical = ValidationResult::new("b.obj");
        critical.add_issue(ValidationIssue::new(Severity::Critical, "missing", "b.obj"));
        assert!(!critical.is_valid);
    }

    #[test]
    fn test_issue_builders_fill_detail_fields() {
        let issue = ValidationIssue::new(Severity::Warning, "odd", "a.obj")
            .with_context("context line")
            .with_recommendation("fix line");

        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.file_path, "a.obj");
        assert_eq!(issue.context, "context line");
        assert_eq!(issue.recommendation, "fix line");
    }

    #[test]
    fn test_stats_accumulate_batches() {
        let mut ok = ValidationResult::new("ok.obj");
        ok.add_issue(ValidationIssue::new(Severity::Info, "note", "ok.obj"));

        let mut warned = ValidationResult::new("warn.obj");
        warned.add_issue(ValidationIssue::new(Severity::Warning, "odd", "warn.obj"));

        let mut broken = ValidationResult::new("bad.obj");
        broken.add_issue(ValidationIssue::new(Severity::Error, "broken", "bad.obj"));

        let stats = ValidationStats::from_results(&[ok, warned, broken]);
        assert_eq!(stats.files_validated, 3);
        assert_eq!(stats.valid_files, 2);
        assert_eq!(stats.files_with_errors, 1);
        assert_eq!(stats.files_with_warnings, 1);
        assert_eq!(stats.info_issues, 1);
        assert_eq!(stats.warning_issues, 1);
        assert_eq!(stats.error_issues, 1);
        assert_eq!(stats.total_issues, 3);
    }
}
