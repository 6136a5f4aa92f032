//! Asset Catalog and Validation Library
//!
//! This library indexes trees of 3D production assets (models, textures,
//! materials, audio, video) and validates files without opening them in
//! authoring tools. The index classifies files by extension and filename,
//! extracts cheap structural metadata, and persists snapshots as JSON with
//! a TTL-based freshness policy. The validator grades each file with
//! severity-ranked findings from integrity and format-specific checks.

pub mod cli;
pub mod io;
pub mod models;
pub mod services;

pub use models::{
    AssetMetadata, AssetRecord, AssetType, CacheSnapshot, Category, Severity, ValidationIssue,
    ValidationResult, ValidationStats,
};
pub use services::index::AssetIndex;
pub use services::validate::AssetValidator;

use std::path::Path;
use std::result;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
    Cache(String),
    System(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::Cache(msg) => write!(f, "Cache error: {msg}"),
            Error::System(msg) => write!(f, "System error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Options for building and refreshing an asset index
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// How long a completed scan stays fresh before `scan` re-walks the tree.
    pub cache_ttl: Duration,
    /// Fan record building out across worker threads.
    pub parallel: bool,
    /// Cooperative cancellation flag, checked between files.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(300),
            parallel: true,
            cancel: None,
        }
    }
}

/// Options for validating assets
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Files larger than this many bytes draw a size warning.
    pub max_file_size: u64,
    /// Leading bytes read per file for header and signature checks.
    pub probe_len: usize,
    /// Fan per-file validation out across worker threads.
    pub parallel: bool,
    /// Cooperative cancellation flag, checked between files.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            max_file_size: 500 * 1024 * 1024,
            probe_len: 1024,
            parallel: true,
            cancel: None,
        }
    }
}

/// Scan a directory tree and return the populated index.
///
/// # Arguments
/// * `root` - The root directory of the asset tree
/// * `opts` - Index options
///
/// # Returns
/// An `AssetIndex` holding one record per recognized asset
pub fn index_directory<P: AsRef<Path>>(root: P, opts: IndexOptions) -> Result<AssetIndex> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(Error::InvalidInput(format!(
            "Path does not exist: {}",
            root.display()
        )));
    }

    if !root.is_dir() {
        return Err(Error::InvalidInput(format!(
            "Path is not a directory: {}",
            root.display()
        )));
    }

    let index = AssetIndex::new(root, opts);
    if !index.scan(true) {
        return Err(Error::System(format!(
            "Scan of {} did not complete",
            root.display()
        )));
    }

    Ok(index)
}

/// Validate every recognized asset under a directory tree.
///
/// # Arguments
/// * `root` - The root directory of the asset tree
/// * `opts` - Validation options
///
/// # Returns
/// One graded result per recognized asset, sorted by path
pub fn validate_directory<P: AsRef<Path>>(
    root: P,
    opts: ValidateOptions,
) -> Result<Vec<models::ValidationResult>> {
    let root = root.as_ref();

    if !root.is_dir() {
        return Err(Error::InvalidInput(format!(
            "Path is not a directory: {}",
            root.display()
        )));
    }

    Ok(AssetValidator::new(opts).validate_directory(root))
}
