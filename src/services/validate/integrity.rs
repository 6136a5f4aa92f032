//! File-level integrity checks run before any format inspection.
//!
//! The probe reads a bounded prefix once and hands it to the format stage
//! so signature checks never re-open the file.

use crate::models::{Severity, ValidationIssue, ValidationResult};
use crate::services::format::format_size;
use crate::ValidateOptions;
use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Smallest prefix that still covers every signature the format stage
/// inspects (FBX header is 27 bytes, blend header 12).
const MIN_PROBE_LEN: usize = 64;

/// Whether the remaining pipeline stages should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Nothing further can be learned: the file is absent, unreadable,
    /// not a regular file, or empty.
    Abort,
}

/// Facts the integrity stage passes on to format checks.
pub struct Probe {
    pub outcome: Outcome,
    pub size: u64,
    pub prefix: Vec<u8>,
}

impl Probe {
    fn abort() -> Self {
        Self {
            outcome: Outcome::Abort,
            size: 0,
            prefix: Vec::new(),
        }
    }
}

/// Run the integrity stage, appending issues to `result`.
pub fn check(path: &Path, options: &ValidateOptions, result: &mut ValidationResult) -> Probe {
    let asset_path = result.asset_path.clone();

    let metadata = match fs::metadata(path) {
        Ok(m) => m,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            result.add_issue(
                ValidationIssue::new(Severity::Critical, "File does not exist", &asset_path)
                    .with_recommendation("Verify the path or restore the file"),
            );
            return Probe::abort();
        }
        Err(err) => {
            result.add_issue(
                ValidationIssue::new(Severity::Critical, "File is not accessible", &asset_path)
                    .with_context(err.to_string())
                    .with_recommendation("Check filesystem permissions"),
            );
            return Probe::abort();
        }
    };

    if !metadata.is_file() {
        result.add_issue(
            ValidationIssue::new(Severity::Critical, "Path is not a regular file", &asset_path)
                .with_recommendation("Point the check at a file, not a directory or device"),
        );
        return Probe::abort();
    }

    let size = metadata.len();
    if size == 0 {
        // An empty file is unusable but not corrupt; nothing downstream
        // can inspect zero bytes, so the pipeline stops here while the
        // result stays valid.
        result.add_issue(
            ValidationIssue::new(Severity::Warning, "File is empty (0 bytes)", &asset_path)
                .with_recommendation("Re-export the asset from its source"),
        );
        return Probe {
            outcome: Outcome::Abort,
            size,
            prefix: Vec::new(),
        };
    }

    if size > options.max_file_size {
        result.add_issue(
            ValidationIssue::new(Severity::Warning, "File exceeds the size limit", &asset_path)
                .with_context(format!(
                    "{} > {}",
                    format_size(size),
                    format_size(options.max_file_size)
                ))
                .with_recommendation("Confirm the asset is meant to be this large"),
        );
    }

    let mut file = match fs::File::open(path) {
        Ok(f) => f,
        Err(err) => {
            result.add_issue(
                ValidationIssue::new(
                    Severity::Critical,
                    "Cannot open file for reading",
                    &asset_path,
                )
                .with_context(err.to_string())
                .with_recommendation("Check filesystem permissions"),
            );
            return Probe::abort();
        }
    };

    let probe_len = options.probe_len.max(MIN_PROBE_LEN);
    let mut prefix = Vec::with_capacity(probe_len);
    if let Err(err) = file
        .by_ref()
        .take(probe_len as u64)
        .read_to_end(&mut prefix)
        && err.kind() != ErrorKind::UnexpectedEof
    {
        result.add_issue(
            ValidationIssue::new(
                Severity::Error,
                "Read failure near the start of the file",
                &asset_path,
            )
            .with_context(err.to_string())
            .with_recommendation("The file may be corrupt; restore it from backup"),
        );
    }

    Probe {
        outcome: Outcome::Continue,
        size,
        prefix,
    }
}
