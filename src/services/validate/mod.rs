//! Asset validation without authoring tools.
//!
//! Validation is a two-stage pipeline per file: the integrity stage
//! (existence, kind, size, readability) runs first and may abort; the
//! format stage then applies extension-specific rules to the byte prefix
//! the integrity stage already read. No stage opens the file twice.

pub mod formats;
pub mod integrity;
pub mod report;

use crate::ValidateOptions;
use crate::models::{Severity, ValidationIssue, ValidationResult};
use crate::services::{classify, walk};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::sync::{Mutex, PoisonError};

/// Stateless validation engine; one instance can serve many batches.
pub struct AssetValidator {
    options: ValidateOptions,
}

impl AssetValidator {
    #[must_use]
    pub fn new(options: ValidateOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ValidateOptions::default())
    }

    /// Validate a single file and return its graded result.
    ///
    /// Never panics and never returns an `Err`: everything that goes wrong,
    /// including an unreadable or missing file, is expressed as issues on
    /// the result.
    #[must_use]
    pub fn validate_one(&self, path: &Path) -> ValidationResult {
        let mut result = ValidationResult::new(path.to_string_lossy());
        log::debug!("Validating {}", path.display());

        let probe = integrity::check(path, &self.options, &mut result);
        if probe.outcome == integrity::Outcome::Abort {
            return result;
        }

        formats::check_format(path, &probe.prefix, probe.size, &mut result);
        result
    }

    /// Validate a batch of files.
    ///
    /// Results are sorted by asset path before returning, so output order
    /// is stable regardless of worker scheduling. Cancellation stops the
    /// batch early; already-finished results are still returned.
    #[must_use]
    pub fn validate_many(&self, paths: &[PathBuf]) -> Vec<ValidationResult> {
        let mut results = if self.options.parallel {
            let collected = Mutex::new(Vec::with_capacity(paths.len()));
            paths.par_iter().for_each(|path| {
                if self.is_cancelled() {
                    return;
                }
                let result = self.validate_one(path);
                let mut guard = collected.lock().unwrap_or_else(PoisonError::into_inner);
                guard.push(result);
            });
            collected.into_inner().unwrap_or_else(PoisonError::into_inner)
        } else {
            let mut collected = Vec::with_capacity(paths.len());
            for path in paths {
                if self.is_cancelled() {
                    break;
                }
                collected.push(self.validate_one(path));
            }
            collected
        };

        results.sort_by(|a, b| a.asset_path.cmp(&b.asset_path));
        results
    }

    /// Walk a directory tree and validate every recognized asset in it.
    ///
    /// Files with unrecognized extensions are skipped. An unwalkable root
    /// yields a single CRITICAL result keyed to the directory itself.
    #[must_use]
    pub fn validate_directory(&self, dir: &Path) -> Vec<ValidationResult> {
        let files = match walk::collect_files(dir) {
            Ok(files) => files,
            Err(err) => {
                let asset_path = dir.to_string_lossy().into_owned();
                let mut result = ValidationResult::new(asset_path.clone());
                result.add_issue(
                    ValidationIssue::new(
                        Severity::Critical,
                        "Directory cannot be scanned",
                        &asset_path,
                    )
                    .with_context(err.to_string())
                    .with_recommendation("Check that the path exists and is readable"),
                );
                return vec![result];
            }
        };

        let matched: Vec<PathBuf> = files
            .into_iter()
            .filter(|path| classify::is_known_type(path))
            .collect();
        log::debug!(
            "Validating {} recognized assets under {}",
            matched.len(),
            dir.display()
        );
        self.validate_many(&matched)
    }

    fn is_cancelled(&self) -> bool {
        self.options
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
