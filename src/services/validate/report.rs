//! Plain-text report rendering for validation batches.

use crate::models::{ValidationResult, ValidationStats};
use crate::services::format::format_timestamp;
use crate::services::index::epoch_secs;
use std::fs;
use std::path::Path;
use std::time::SystemTime;

const RULE_WIDTH: usize = 70;

/// Render a report for a batch of results, stamped with the current time.
#[must_use]
pub fn generate_report(results: &[ValidationResult]) -> String {
    render_report(results, epoch_secs(SystemTime::now()))
}

/// Render a report with an explicit generation timestamp.
///
/// One detail block per asset, in path order; clean assets render with an
/// empty block so the report always accounts for every file checked.
#[must_use]
pub fn render_report(results: &[ValidationResult], generated_at: u64) -> String {
    let stats = ValidationStats::from_results(results);
    let mut out = String::new();

    let rule = "=".repeat(RULE_WIDTH);
    out.push_str(&rule);
    out.push('\n');
    out.push_str("ASSET VALIDATION REPORT\n");
    out.push_str(&format!("Generated: {}\n", format_timestamp(generated_at)));
    out.push_str(&rule);
    out.push_str("\n\n");

    out.push_str("Summary\n");
    out.push_str(&format!("  Files validated:   {}\n", stats.files_validated));
    out.push_str(&format!("  Valid:             {}\n", stats.valid_files));
    out.push_str(&format!("  With errors:       {}\n", stats.files_with_errors));
    out.push_str(&format!("  With warnings:     {}\n", stats.files_with_warnings));
    out.push_str(&format!("  Critical issues:   {}\n", stats.critical_issues));
    out.push_str(&format!("  Error issues:      {}\n", stats.error_issues));
    out.push_str(&format!("  Warning issues:    {}\n", stats.warning_issues));
    out.push_str(&format!("  Info issues:       {}\n", stats.info_issues));
    out.push_str(&format!("  Total issues:      {}\n", stats.total_issues));

    if results.is_empty() {
        out.push_str("\nNo assets were validated.\n");
        return out;
    }

    let mut ordered: Vec<&ValidationResult> = results.iter().collect();
    ordered.sort_by(|a, b| a.asset_path.cmp(&b.asset_path));

    for result in ordered {
        out.push('\n');
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        let verdict = if result.is_valid { "VALID" } else { "INVALID" };
        out.push_str(&format!("{} [{verdict}]\n", result.asset_path));

        // Issues stay in pipeline order: integrity findings before format
        // findings.
        for issue in &result.issues {
            out.push_str(&format!("  [{}] {}\n", issue.severity, issue.description));
            if !issue.context.is_empty() {
                out.push_str(&format!("      context: {}\n", issue.context));
            }
            if !issue.recommendation.is_empty() {
                out.push_str(&format!("      fix: {}\n", issue.recommendation));
            }
        }
    }

    out
}

/// Write a rendered report to disk, creating parent directories as needed.
/// Failure is logged and reported through the return value, never raised.
pub fn save_report(path: &Path, report: &str) -> bool {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && let Err(err) = fs::create_dir_all(parent)
    {
        log::warn!("Failed to create report directory {}: {err}", parent.display());
        return false;
    }

    match fs::write(path, report) {
        Ok(()) => {
            log::debug!("Report written to {}", path.display());
            true
        }
        Err(err) => {
            log::warn!("Failed to write report {}: {err}", path.display());
            false
        }
    }
}
