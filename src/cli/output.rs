//! Output formatting for CLI

use crate::models::{
    ASSET_TYPES, AssetRecord, AssetType, Category, NAMED_CATEGORIES, ValidationResult,
    ValidationStats,
};
use crate::services::format::format_size;

/// Reset ANSI color
const COLOR_RESET: &str = "\x1b[0m";

/// ANSI color for a catalog row: red when invalid, yellow when the record
/// carries warnings.
fn row_color(record: &AssetRecord) -> &'static str {
    if !record.is_valid {
        "\x1b[31m"
    } else if !record.warnings.is_empty() {
        "\x1b[33m"
    } else {
        ""
    }
}

/// Print asset records as an aligned table.
pub fn print_asset_table(records: &[AssetRecord]) {
    if records.is_empty() {
        println!("No assets found.");
        return;
    }

    println!(
        "{:<52} {:<8} {:<12} {:>10}",
        "Path", "Type", "Category", "Size"
    );
    println!("{}", "─".repeat(86));

    for record in records {
        let color = row_color(record);
        let reset = if color.is_empty() { "" } else { COLOR_RESET };
        println!(
            "{color}{:<52}{reset} {:<8} {:<12} {:>10}",
            record.relative_path,
            record.asset_type,
            record.category,
            format_size(record.size_bytes),
        );
    }
}

/// Tally records per category in display order, omitting empty groups.
#[must_use]
pub fn category_tally(records: &[AssetRecord]) -> Vec<(Category, usize)> {
    let mut tally = Vec::new();
    for category in NAMED_CATEGORIES.into_iter().chain([Category::Misc]) {
        let count = records
            .iter()
            .filter(|record| record.category == category)
            .count();
        if count > 0 {
            tally.push((category, count));
        }
    }
    tally
}

/// Tally records per asset type in display order, omitting empty groups.
#[must_use]
pub fn type_tally(records: &[AssetRecord]) -> Vec<(AssetType, usize)> {
    let mut tally = Vec::new();
    for asset_type in ASSET_TYPES {
        let count = records
            .iter()
            .filter(|record| record.asset_type == asset_type)
            .count();
        if count > 0 {
            tally.push((asset_type, count));
        }
    }
    tally
}

/// Print category and type tallies.
pub fn print_count_summary(categories: &[(Category, usize)], types: &[(AssetType, usize)]) {
    if !categories.is_empty() {
        println!();
        println!("Categories:");
        for (category, count) in categories {
            println!("  {:<14} {count}", category.as_str());
        }
    }

    if !types.is_empty() {
        println!();
        println!("Types:");
        for (asset_type, count) in types {
            println!("  {:<14} {count}", asset_type.as_str());
        }
    }
}

/// Format asset records as JSON
pub fn format_records_json(scan_time: u64, records: &[AssetRecord]) -> String {
    let output = serde_json::json!({
        "scan_time": scan_time,
        "asset_count": records.len(),
        "assets": records,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Format validation results as JSON
pub fn format_results_json(results: &[ValidationResult]) -> String {
    let output = serde_json::json!({
        "stats": ValidationStats::from_results(results),
        "results": results,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}
